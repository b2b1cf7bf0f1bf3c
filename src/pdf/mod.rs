//! PDF rendering: conversion and page text extraction

pub mod convert;
pub mod pages;

// Re-export commonly used items
pub use convert::{LibreOfficeConverter, PdfConverter, SOFFICE_ENV};
pub use pages::{extract_pages, page_texts};
