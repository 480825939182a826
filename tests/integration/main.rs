mod common;
mod test_cache;
