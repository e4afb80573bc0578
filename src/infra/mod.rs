pub mod neows;
