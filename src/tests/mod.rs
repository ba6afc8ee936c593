
mod codec_tests;
mod extraction_tests;
