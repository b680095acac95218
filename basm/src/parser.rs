use pest_derive::Parser;

/// Parser for the BRISC assembly language.
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct BasmParser;
