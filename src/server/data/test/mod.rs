mod car;
mod engine;
mod repository;
