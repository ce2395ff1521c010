mod server;
mod switch;
