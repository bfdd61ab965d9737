pub mod sqrt;
