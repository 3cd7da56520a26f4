//! Emoji detection on grapheme clusters.
//!
//! This is a table-driven approximation of the Unicode `Emoji_Presentation`
//! and `Extended_Pictographic` properties, which is all the part factory needs
//! to decide where emoji boundaries are.

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Returns true if the whole grapheme cluster renders as an emoji.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if grapheme.contains(COMBINING_KEYCAP) {
        return true;
    }
    if is_regional_indicator(first) {
        return grapheme.chars().filter(|c| is_regional_indicator(*c)).count() == 2;
    }

    let has_vs16 = grapheme.contains(VARIATION_SELECTOR_16);
    let is_sequence = grapheme.contains(ZERO_WIDTH_JOINER);
    if has_emoji_presentation(first) {
        return true;
    }
    (has_vs16 || is_sequence) && is_pictographic(first)
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Characters that render as emoji without a variation selector.
fn has_emoji_presentation(c: char) -> bool {
    matches!(c,
        '\u{231A}'..='\u{231B}'
        | '\u{23E9}'..='\u{23EC}'
        | '\u{23F0}'
        | '\u{23F3}'
        | '\u{25FD}'..='\u{25FE}'
        | '\u{2614}'..='\u{2615}'
        | '\u{2648}'..='\u{2653}'
        | '\u{267F}'
        | '\u{2693}'
        | '\u{26A1}'
        | '\u{26AA}'..='\u{26AB}'
        | '\u{26BD}'..='\u{26BE}'
        | '\u{26C4}'..='\u{26C5}'
        | '\u{26CE}'
        | '\u{26D4}'
        | '\u{26EA}'
        | '\u{26F2}'..='\u{26F3}'
        | '\u{26F5}'
        | '\u{26FA}'
        | '\u{26FD}'
        | '\u{2705}'
        | '\u{270A}'..='\u{270B}'
        | '\u{2728}'
        | '\u{274C}'
        | '\u{274E}'
        | '\u{2753}'..='\u{2755}'
        | '\u{2757}'
        | '\u{2795}'..='\u{2797}'
        | '\u{27B0}'
        | '\u{27BF}'
        | '\u{2B1B}'..='\u{2B1C}'
        | '\u{2B50}'
        | '\u{2B55}'
        | '\u{1F004}'
        | '\u{1F0CF}'
        | '\u{1F18E}'
        | '\u{1F191}'..='\u{1F19A}'
        | '\u{1F201}'
        | '\u{1F21A}'
        | '\u{1F22F}'
        | '\u{1F232}'..='\u{1F236}'
        | '\u{1F238}'..='\u{1F23A}'
        | '\u{1F250}'..='\u{1F251}'
        | '\u{1F300}'..='\u{1F320}'
        | '\u{1F32D}'..='\u{1F335}'
        | '\u{1F337}'..='\u{1F37C}'
        | '\u{1F37E}'..='\u{1F393}'
        | '\u{1F3A0}'..='\u{1F3CA}'
        | '\u{1F3CF}'..='\u{1F3D3}'
        | '\u{1F3E0}'..='\u{1F3F0}'
        | '\u{1F3F4}'
        | '\u{1F3F8}'..='\u{1F43E}'
        | '\u{1F440}'
        | '\u{1F442}'..='\u{1F4FC}'
        | '\u{1F4FF}'..='\u{1F53D}'
        | '\u{1F54B}'..='\u{1F54E}'
        | '\u{1F550}'..='\u{1F567}'
        | '\u{1F57A}'
        | '\u{1F595}'..='\u{1F596}'
        | '\u{1F5A4}'
        | '\u{1F5FB}'..='\u{1F64F}'
        | '\u{1F680}'..='\u{1F6C5}'
        | '\u{1F6CC}'
        | '\u{1F6D0}'..='\u{1F6D2}'
        | '\u{1F6D5}'..='\u{1F6D7}'
        | '\u{1F6DC}'..='\u{1F6DF}'
        | '\u{1F6EB}'..='\u{1F6EC}'
        | '\u{1F6F4}'..='\u{1F6FC}'
        | '\u{1F7E0}'..='\u{1F7EB}'
        | '\u{1F7F0}'
        | '\u{1F90C}'..='\u{1F93A}'
        | '\u{1F93C}'..='\u{1F945}'
        | '\u{1F947}'..='\u{1F9FF}'
        | '\u{1FA70}'..='\u{1FAFF}'
    )
}

/// Pictographic characters that default to text presentation but become emoji
/// with a variation selector or inside a ZWJ sequence.
fn is_pictographic(c: char) -> bool {
    matches!(c,
        '\u{00A9}'
        | '\u{00AE}'
        | '\u{203C}'
        | '\u{2049}'
        | '\u{2122}'
        | '\u{2139}'
        | '\u{2194}'..='\u{21AA}'
        | '\u{2300}'..='\u{23FF}'
        | '\u{24C2}'
        | '\u{25AA}'..='\u{25FE}'
        | '\u{2600}'..='\u{27BF}'
        | '\u{2934}'..='\u{2935}'
        | '\u{2B05}'..='\u{2B55}'
        | '\u{3030}'
        | '\u{303D}'
        | '\u{3297}'
        | '\u{3299}'
        | '\u{1F000}'..='\u{1FAFF}'
    )
}
