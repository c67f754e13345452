//! Plain-text rendering of traces.

use aes_trace::codec::{bytes_to_hex, format_matrix};
use aes_trace::{Block, Round, RoundKeys, Trace};

fn indented(block: &Block, indent: &str) -> String {
    format_matrix(block)
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the plaintext matrix as the initial state.
pub fn initial_state(plaintext: &Block) -> String {
    format!(
        "Initial State (plaintext mapped column-wise)\n{}\n",
        indented(plaintext, "    ")
    )
}

/// Renders one round: heading, then every operation with its state matrix.
pub fn round(round: &Round) -> String {
    let mut out = format!("== {} - {}\n", round.title(), round.summary());
    for op in round.operations() {
        out.push_str(&format!("  {}: {}\n", op.name(), op.description()));
        if let Some(key) = op.round_key() {
            out.push_str(&format!("    round key: {}\n", bytes_to_hex(key, " ")));
        }
        out.push_str(&indented(op.state(), "    "));
        out.push('\n');
    }
    out
}

/// Renders the key schedule, one round key per line.
pub fn round_keys(keys: &RoundKeys) -> String {
    let mut out = String::from("Round Keys\n");
    for (index, key) in keys.iter().enumerate() {
        out.push_str(&format!("  {index:>2}: {}\n", bytes_to_hex(key, " ")));
    }
    out
}

/// Renders the full trace.
pub fn trace(plaintext: &Block, trace: &Trace) -> String {
    let mut out = initial_state(plaintext);
    for r in trace.rounds() {
        out.push('\n');
        out.push_str(&round(r));
    }
    out.push_str(&format!(
        "\nCiphertext: {}\n\n{}",
        bytes_to_hex(trace.cipher_state(), " "),
        round_keys(trace.round_keys())
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_trace::trace_block;
    use aes_trace::Aes128Key;

    fn sample() -> (Block, Trace) {
        let plaintext: Block = std::array::from_fn(|i| (i as u8) * 0x11);
        let key = Aes128Key::from(std::array::from_fn(|i| i as u8));
        (plaintext, trace_block(&plaintext, &key))
    }

    #[test]
    fn full_trace_lists_every_round_and_the_ciphertext() {
        let (plaintext, t) = sample();
        let text = trace(&plaintext, &t);
        assert!(text.contains("== Initial Round - Key whitening before main rounds"));
        assert!(text.contains("== Round 10 - Final round omits MixColumns"));
        assert!(text.contains("Ciphertext: 69 c4 e0 d8 6a 7b 04 30 d8 cd b7 80 70 b4 c5 5a"));
        assert_eq!(text.matches("MixColumns:").count(), 9);
        assert_eq!(text.matches("round key:").count(), 11);
    }

    #[test]
    fn round_key_listing_has_eleven_entries() {
        let (_, t) = sample();
        let text = round_keys(t.round_keys());
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains(" 0: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f"));
    }

    #[test]
    fn initial_state_is_column_major() {
        let (plaintext, _) = sample();
        let text = initial_state(&plaintext);
        assert!(text.contains("    00 44 88 cc\n"));
    }

    #[test]
    fn round_lists_key_and_matrix_per_operation() {
        let (_, t) = sample();
        let text = round(&t.rounds()[0]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== Initial Round - Key whitening before main rounds");
        assert!(lines[1].starts_with("  AddRoundKey: "));
        assert_eq!(
            lines[2],
            "    round key: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f"
        );
        // 00102030405060708090a0b0c0d0e0f0 laid out column-major
        assert_eq!(lines[3], "    00 40 80 c0");
        assert_eq!(lines.len(), 7);
        assert!(text.ends_with('\n'));
    }
}
