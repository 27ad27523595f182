pub mod corpus;
pub mod dataset;
pub mod rhyme_line;
pub mod utility;
