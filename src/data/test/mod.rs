mod slot;
