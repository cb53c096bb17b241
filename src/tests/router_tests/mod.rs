mod cms_fragment_tests;
mod form_tests;
mod page_tests;
