//! Renders the sorted ranges as the C++ `EmojiTable::create()` definition
//! consumed by `EmojiTable.h`.

use crate::models::CodePointRange;

const PREAMBLE: &str = r#"
#include "EmojiTable.h"

#ifdef FULL_EMOJI_TABLE

namespace odtr {
namespace unicode {

EmojiTable EmojiTable::create()
{
    EmojiTable inst;
"#;

const EPILOGUE: &str = r#"
    return inst;
}

} // namespace unicode
} // namespace odtr
#endif
"#;

/// `0x` followed by upper-case hex, at least four digits wide.
pub fn format_code_point(cp: u32) -> String {
    format!("0x{cp:04X}")
}

/// One `inst.add(..)` registration statement, newline included.
pub fn format_range(range: &CodePointRange) -> String {
    if range.is_single() {
        format!("    inst.add({});\n", format_code_point(range.begin))
    } else {
        format!(
            "    inst.add({}, {});\n",
            format_code_point(range.begin),
            format_code_point(range.end)
        )
    }
}

/// Render the complete generated source file.
///
/// `ranges` are emitted in the order given; callers pass them sorted by
/// lower bound. No I/O happens here.
pub fn render_table(ranges: &[CodePointRange], source_url: &str) -> String {
    let mut out = format!("// generated from: {source_url}");
    out.push_str(PREAMBLE);
    out.push_str(&format!("    inst.table_.reserve({});\n\n", ranges.len()));
    for range in ranges {
        out.push_str(&format_range(range));
    }
    out.push_str(EPILOGUE);
    out
}
