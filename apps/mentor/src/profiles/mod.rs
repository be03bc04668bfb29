// Profile persistence: the profile/chat-history model and the JSON file store.
// The store is read wholesale at startup and rewritten wholesale on every mutation.

pub mod handlers;
pub mod models;
pub mod store;
