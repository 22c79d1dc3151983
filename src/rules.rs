use regex::Regex;

/// A single rewrite step of the pipeline.
pub(crate) type Rule = fn(&str) -> String;

/// The rewrite steps, in the order they must be applied.
pub(crate) const RULES: [(&str, Rule); 21] = [
    ("dedup", dedup),
    ("drop_initial_letters", drop_initial_letters),
    ("drop_b_after_m_at_end", drop_b_after_m_at_end),
    ("transform_ck", transform_ck),
    ("transform_c", transform_c),
    ("transform_d", transform_d),
    ("drop_g", drop_g),
    ("transform_g", transform_g),
    ("drop_h", drop_h),
    ("transform_ph", transform_ph),
    ("transform_q", transform_q),
    ("transform_s", transform_s),
    ("transform_x", transform_x),
    ("transform_t", transform_t),
    ("drop_t", drop_t),
    ("transform_v", transform_v),
    ("transform_wh", transform_wh),
    ("drop_w", drop_w),
    ("drop_y", drop_y),
    ("transform_z", transform_z),
    ("drop_vowels", drop_vowels),
];

// The regex crate has no look-around: "preceded by" and "followed by" are
// captured and written back. Matches never overlap, so in `chch` only the
// first `ch` is rewritten.
lazy_static! {
    static ref INITIAL_LETTERS: Regex = Regex::new("^(kn|gn|pn|ae|wr)").unwrap();
    static ref END_MB: Regex = Regex::new("mb$").unwrap();
    static ref CH: Regex = Regex::new("([^s]|^)c(h)").unwrap();
    static ref CIA: Regex = Regex::new("cia").unwrap();
    static ref C_FRONT: Regex = Regex::new("c([iey])").unwrap();
    static ref DG_FRONT: Regex = Regex::new("d(ge|gy|gi)").unwrap();
    static ref GH: Regex = Regex::new("gh([^aeiou]|$)").unwrap();
    static ref END_GN: Regex = Regex::new("g(n|ned)$").unwrap();
    static ref G_FRONT: Regex = Regex::new("([^g]|^)g([iey])").unwrap();
    static ref VOWEL_H: Regex = Regex::new("([aeiou])h([^aeiou])").unwrap();
    static ref S_SOFT: Regex = Regex::new("s(h|io|ia)").unwrap();
    static ref START_X: Regex = Regex::new("^x").unwrap();
    static ref T_SOFT: Regex = Regex::new("t(ia|io)").unwrap();
    static ref START_WH: Regex = Regex::new("^wh").unwrap();
    static ref SILENT_W: Regex = Regex::new("w([^aeiou]|$)").unwrap();
    static ref SILENT_Y: Regex = Regex::new("y([^aeiou]|$)").unwrap();
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Run a lower-cased token through every rule of [RULES].
pub(crate) fn apply_rules(token: &str) -> String {
    RULES
        .iter()
        .fold(token.to_string(), |txt, (_, rule)| rule(&txt))
}

/// Collapse runs of identical letters, except runs of `c`.
pub(crate) fn dedup(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    let mut chars = token.chars();
    let mut previous = match chars.next() {
        Some(ch) => ch,
        None => return result,
    };
    result.push(previous);

    for ch in chars {
        if ch == 'c' || ch != previous {
            result.push(ch);
        }
        previous = ch;
    }

    result
}

/// `kn`, `gn`, `pn`, `ae` and `wr` lose their first letter at the start of a word.
pub(crate) fn drop_initial_letters(token: &str) -> String {
    if INITIAL_LETTERS.is_match(token) {
        let mut chars = token.chars();
        chars.next();
        chars.as_str().to_string()
    } else {
        token.to_string()
    }
}

pub(crate) fn drop_b_after_m_at_end(token: &str) -> String {
    END_MB.replace(token, "m").to_string()
}

pub(crate) fn transform_ck(token: &str) -> String {
    token.replace("ck", "k")
}

/// Handle `ch` (unless part of `sch`), `cia`, soft `c` and then hard `c`, in that order.
pub(crate) fn transform_c(token: &str) -> String {
    let txt = CH.replace_all(token, "${1}x${2}");
    let txt = CIA.replace_all(txt.trim(), "xia").to_string();
    let txt = C_FRONT.replace_all(&txt, "s$1").to_string();

    txt.replace('c', "k")
}

pub(crate) fn transform_d(token: &str) -> String {
    let txt = DG_FRONT.replace_all(token, "j$1").to_string();

    txt.replace('d', "t")
}

/// Silent `g`: before an `h` that is not followed by a vowel, and in a final `gn` or `gned`.
pub(crate) fn drop_g(token: &str) -> String {
    let txt = GH.replace_all(token, "h$1").to_string();

    END_GN.replace(&txt, "$1").to_string()
}

/// Soft `g` becomes `j` unless doubled, then `gg` collapses and every other `g` is hard.
pub(crate) fn transform_g(token: &str) -> String {
    let txt = G_FRONT.replace_all(token, "${1}j$2").to_string();
    let txt = txt.replace("gg", "g");

    txt.replace('g', "k")
}

/// `h` between a vowel and a consonant is silent.
pub(crate) fn drop_h(token: &str) -> String {
    VOWEL_H.replace_all(token, "$1$2").to_string()
}

pub(crate) fn transform_ph(token: &str) -> String {
    token.replace("ph", "f")
}

pub(crate) fn transform_q(token: &str) -> String {
    token.replace('q', "k")
}

pub(crate) fn transform_s(token: &str) -> String {
    S_SOFT.replace_all(token, "x$1").to_string()
}

/// A leading `x` sounds like `s`, any other like `ks`.
pub(crate) fn transform_x(token: &str) -> String {
    let txt = START_X.replace(token, "s");

    txt.replace('x', "ks")
}

/// `tia` and `tio` become `xia` and `xio`, then `th` is encoded as `0`.
pub(crate) fn transform_t(token: &str) -> String {
    let txt = T_SOFT.replace_all(token, "x$1");

    txt.replace("th", "0")
}

pub(crate) fn drop_t(token: &str) -> String {
    token.replace("tch", "ch")
}

pub(crate) fn transform_v(token: &str) -> String {
    token.replace('v', "f")
}

pub(crate) fn transform_wh(token: &str) -> String {
    START_WH.replace(token, "w").to_string()
}

pub(crate) fn drop_w(token: &str) -> String {
    SILENT_W.replace_all(token, "$1").to_string()
}

pub(crate) fn drop_y(token: &str) -> String {
    SILENT_Y.replace_all(token, "$1").to_string()
}

pub(crate) fn transform_z(token: &str) -> String {
    token.replace('z', "s")
}

/// Remove every vowel but the first letter, which is always kept.
pub(crate) fn drop_vowels(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(token.len());
            result.push(first);
            result.extend(chars.filter(|ch| !is_vowel(*ch)));
            result
        }
        None => String::new(),
    }
}
