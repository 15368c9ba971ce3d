// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_emoji_data(lines: usize) -> String {
    let mut content = String::from("# emoji-data.txt\n#\n\n");
    for i in 0..lines {
        let begin = 0x1F000 + (lines - i) as u32 * 4;
        if i % 3 == 0 {
            content.push_str(&format!(
                "{begin:04X}          ; Emoji                # E1.0   [1] (?)\n"
            ));
        } else {
            content.push_str(&format!(
                "{begin:04X}..{:04X}    ; Emoji                # E1.0   [4] (?..?)\n",
                begin + 3
            ));
        }
        if i % 50 == 0 {
            content.push_str("\n# ================================================\n\n");
        }
    }
    content
}
