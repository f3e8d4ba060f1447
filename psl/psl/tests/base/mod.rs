mod base_types;
mod basic;
mod comments;
mod duplicates;
mod names;
