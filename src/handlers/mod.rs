mod link_received;
mod not_a_link_received;

pub use link_received::link_received;
pub use not_a_link_received::not_a_link_received;
