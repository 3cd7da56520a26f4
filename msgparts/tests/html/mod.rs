mod blocks;
mod inline;
mod lists;
mod pills;
mod quotes;
