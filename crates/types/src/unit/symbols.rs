/// 単位記号と SI 接頭辞の表。
use crate::dimension::Dimension;

pub(super) struct Symbol {
    pub name: &'static str,
    pub scale: f64,
    pub dimension: Dimension,
    /// SI 接頭辞を付けられるか。`kg` `min` `h` は付けられない。
    pub prefixable: bool,
}

const fn dim(m: i8, l: i8, t: i8, i: i8, th: i8, n: i8, j: i8) -> Dimension {
    Dimension::new([m, l, t, i, th, n, j])
}

const fn symbol(name: &'static str, scale: f64, dimension: Dimension, prefixable: bool) -> Symbol {
    Symbol {
        name,
        scale,
        dimension,
        prefixable,
    }
}

pub(super) const SYMBOLS: &[Symbol] = &[
    // 基本単位
    symbol("m", 1.0, dim(0, 1, 0, 0, 0, 0, 0), true),
    symbol("g", 1e-3, dim(1, 0, 0, 0, 0, 0, 0), true),
    symbol("kg", 1.0, dim(1, 0, 0, 0, 0, 0, 0), false),
    symbol("s", 1.0, dim(0, 0, 1, 0, 0, 0, 0), true),
    symbol("A", 1.0, dim(0, 0, 0, 1, 0, 0, 0), true),
    symbol("K", 1.0, dim(0, 0, 0, 0, 1, 0, 0), true),
    symbol("mol", 1.0, dim(0, 0, 0, 0, 0, 1, 0), true),
    symbol("cd", 1.0, dim(0, 0, 0, 0, 0, 0, 1), true),
    symbol("rad", 1.0, Dimension::DIMENSIONLESS, true),
    symbol("sr", 1.0, Dimension::DIMENSIONLESS, true),
    // 組立単位
    symbol("Hz", 1.0, dim(0, 0, -1, 0, 0, 0, 0), true),
    symbol("N", 1.0, dim(1, 1, -2, 0, 0, 0, 0), true),
    symbol("Pa", 1.0, dim(1, -1, -2, 0, 0, 0, 0), true),
    symbol("J", 1.0, dim(1, 2, -2, 0, 0, 0, 0), true),
    symbol("W", 1.0, dim(1, 2, -3, 0, 0, 0, 0), true),
    symbol("C", 1.0, dim(0, 0, 1, 1, 0, 0, 0), true),
    symbol("V", 1.0, dim(1, 2, -3, -1, 0, 0, 0), true),
    // SI 併用単位
    symbol("min", 60.0, dim(0, 0, 1, 0, 0, 0, 0), false),
    symbol("h", 3600.0, dim(0, 0, 1, 0, 0, 0, 0), false),
];

/// `da` は `d` より先に照合する。
pub(super) const PREFIXES: &[(&str, f64)] = &[
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("µ", 1e-6),
    ("μ", 1e-6),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// 記号を `(倍率, 次元)` に解決する。完全一致を接頭辞分解より優先する。
pub(super) fn lookup(token: &str) -> Option<(f64, Dimension)> {
    if let Some(s) = SYMBOLS.iter().find(|s| s.name == token) {
        return Some((s.scale, s.dimension));
    }
    PREFIXES.iter().find_map(|&(prefix, factor)| {
        let rest = token.strip_prefix(prefix)?;
        SYMBOLS
            .iter()
            .find(|s| s.prefixable && s.name == rest)
            .map(|s| (factor * s.scale, s.dimension))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins_over_prefix() {
        // "mol" は m + "ol" ではなくモル、"cd" は c + "d" ではなくカンデラ
        assert_eq!(lookup("mol").map(|(s, _)| s), Some(1.0));
        assert_eq!(lookup("cd").map(|(s, _)| s), Some(1.0));
        assert_eq!(lookup("h").map(|(s, _)| s), Some(3600.0));
    }

    #[test]
    fn prefixed_symbols() {
        assert_eq!(lookup("km").map(|(s, _)| s), Some(1e3));
        assert_eq!(lookup("hPa").map(|(s, _)| s), Some(1e2));
        assert_eq!(lookup("dam").map(|(s, _)| s), Some(1e1));
        assert_eq!(lookup("us").map(|(s, _)| s), Some(1e-6));
    }

    #[test]
    fn non_prefixable_symbols() {
        assert!(lookup("kkg").is_none());
        assert!(lookup("kmin").is_none());
    }

    #[test]
    fn unknown_symbols() {
        assert!(lookup("").is_none());
        assert!(lookup("T").is_none());
        assert!(lookup("foo").is_none());
    }
}
