pub mod guilds;

pub use guilds::joined_guilds;
