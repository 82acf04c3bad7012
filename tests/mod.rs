mod support;
mod pipeline_tests;
