// HTTP surface for resume export, layout preview and metric parsing.

pub mod handlers;
