pub mod a001_completion;
