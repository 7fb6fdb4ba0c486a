pub mod file_cart_storage;
