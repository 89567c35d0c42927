mod people_pages;
mod server;
