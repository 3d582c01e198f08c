//! Cross-module checks of the witness field: the gate operations, the
//! big-integer boundary and the text encoding exercised together.

#[cfg(test)]
mod integration;
