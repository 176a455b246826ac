//! # crypto-icons
//!
//! Scaffolds and incrementally edits the generated crypto icon files of a
//! web project: the `iconMap` lookup table from icon name to light/dark image
//! URLs, and one enum of known names per category (token, wallet, system).
//!
//! | Command | Description |
//! |---------|-------------|
//! | `crypto-next-icons init` | Create the target directory and seed the generated files |
//! | `crypto-next-icons config` | Show, set or reset the project settings |
//! | `crypto-next-icons add` | Add token, wallet or system icons |
//! | `crypto-next-icons remove` | Remove token, wallet or system icons |
//! | `crypto-next-icons update` | Point the image helpers at the hosted CDN |
//!
//! The interesting part is [`editor`]: it parses the generated declarations
//! back into data ([`icon_map`], [`enum_file`]), merges or deletes one entry
//! and prints the declaration again in the indentation and line-ending style
//! the file already uses, so repeated runs are byte-stable.

pub mod category;
pub mod commands;
pub mod editor;
pub mod enum_file;
pub mod error;
pub mod icon_map;
pub mod next_config;
pub mod scaffold;
pub mod settings;
pub mod special_icons;
pub mod style;
pub mod syntax;
pub mod templates;

pub use category::Category;
pub use error::IconError;
