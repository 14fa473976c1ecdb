pub mod fasta;
pub mod version;
