mod commands;
mod content;
