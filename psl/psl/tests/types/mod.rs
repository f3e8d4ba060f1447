mod extensions;
mod negative;
mod positive;
mod unsupported;
