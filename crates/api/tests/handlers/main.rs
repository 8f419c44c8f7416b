
mod slots_test;
