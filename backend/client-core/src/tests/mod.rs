mod token_store;
