pub mod client;
pub mod local_storage;
pub mod supabase_storage;
