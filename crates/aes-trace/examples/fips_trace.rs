//! Traces the FIPS-197 Appendix C.1 vector and prints each step.

use aes_trace::codec::{bytes_to_hex, parse_block_hex};
use aes_trace::{encrypt_with_trace, Input};

fn main() -> aes_trace::Result<()> {
    let plaintext = parse_block_hex("00112233445566778899aabbccddeeff", Input::Plaintext)?;
    let key = parse_block_hex("000102030405060708090a0b0c0d0e0f", Input::Key)?;
    let trace = encrypt_with_trace(&plaintext, &key)?;

    for round in trace.rounds() {
        println!("{} - {}", round.title(), round.summary());
        for op in round.operations() {
            println!("  {:<12} {}", op.name(), bytes_to_hex(op.state(), " "));
        }
    }
    println!("ciphertext: {}", bytes_to_hex(trace.cipher_state(), ""));
    Ok(())
}
