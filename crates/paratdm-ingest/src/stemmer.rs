//! Porter suffix-stripping stemmer.
//!
//! Porter, 1980, "An algorithm for suffix stripping", Program 14(3).
//! The rule steps, their order and the region tests follow the published
//! reference implementation, including its two bounds fixes: the `k == 0`
//! early return in the double-suffix and removal steps, and the `j >= 0`
//! check before testing the letter in front of `-ion`.
//!
//! Input must be lowercase ASCII. Any other word is returned unchanged.

use std::collections::HashMap;

/// Reduce a lowercase word to its root form.
pub fn stem(word: &str) -> String {
    if !word.bytes().all(|c| c.is_ascii_lowercase()) {
        return word.to_string();
    }
    let mut buf = StemBuffer::new(word);
    buf.run();
    buf.into_stem()
}

/// Memoizing wrapper around [`stem`] for corpora with repeated tokens.
#[derive(Debug, Default)]
pub struct StemCache {
    cache: HashMap<String, String>,
}

impl StemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stem(&mut self, word: &str) -> String {
        if let Some(hit) = self.cache.get(word) {
            return hit.clone();
        }
        let stemmed = stem(word);
        self.cache.insert(word.to_string(), stemmed.clone());
        stemmed
    }

    /// Distinct words stemmed so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Working state: `b[0..=k]` is the live word, `j` marks the end of the
/// stem region found by the last successful `ends` test. Both indices can
/// legitimately reach -1.
struct StemBuffer {
    b: Vec<u8>,
    j: isize,
    k: isize,
}

impl StemBuffer {
    fn new(word: &str) -> Self {
        Self {
            b: word.as_bytes().to_vec(),
            j: 0,
            k: word.len() as isize - 1,
        }
    }

    fn run(&mut self) {
        if self.k > 1 {
            self.step1();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
            self.step6();
        }
    }

    fn into_stem(mut self) -> String {
        self.b.truncate((self.k + 1).max(0) as usize);
        // only ASCII bytes ever enter the buffer
        String::from_utf8_lossy(&self.b).into_owned()
    }

    fn at(&self, i: isize) -> u8 {
        self.b[i as usize]
    }

    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of consonant-sequence/vowel-sequence pairs in `b[0..=j]`.
    ///
    /// ```text
    /// <c><v>       0
    /// <c>vc<v>     1
    /// <c>vcvc<v>   2
    /// ```
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    fn double_consonant(&self, i: isize) -> bool {
        i >= 1 && self.at(i) == self.at(i - 1) && self.cons(i)
    }

    /// `i-2, i-1, i` is consonant-vowel-consonant and the last consonant is
    /// not w, x or y (hop(e), crim(e) but snow, box, tray).
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), b'w' | b'x' | b'y')
    }

    fn ends(&mut self, s: &str) -> bool {
        let len = s.len() as isize;
        let start = self.k - len + 1;
        if start < 0 {
            return false;
        }
        let start = start as usize;
        if &self.b[start..start + s.len()] != s.as_bytes() {
            return false;
        }
        self.j = self.k - len;
        true
    }

    /// Replace `b[j+1..=k]` with `s`.
    fn set_to(&mut self, s: &str) {
        self.b.truncate((self.j + 1) as usize);
        self.b.extend_from_slice(s.as_bytes());
        self.k = self.j + s.len() as isize;
    }

    fn r(&mut self, s: &str) {
        if self.m() > 0 {
            self.set_to(s);
        }
    }

    /// Plurals, -ed and -ing.
    fn step1(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }
        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.at(self.k), b'l' | b's' | b'z') {
                    self.k += 1;
                }
            } else if self.m() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y becomes i when the stem has another vowel.
    fn step2(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffixes to single ones: -ization = -ize + -ation -> -ize.
    fn step3(&mut self) {
        if self.k == 0 {
            return;
        }
        match self.at(self.k - 1) {
            b'a' => {
                if self.ends("ational") {
                    self.r("ate");
                } else if self.ends("tional") {
                    self.r("tion");
                }
            }
            b'c' => {
                if self.ends("enci") {
                    self.r("ence");
                } else if self.ends("anci") {
                    self.r("ance");
                }
            }
            b'e' => {
                if self.ends("izer") {
                    self.r("ize");
                }
            }
            b'l' => {
                if self.ends("bli") {
                    self.r("ble");
                } else if self.ends("alli") {
                    self.r("al");
                } else if self.ends("entli") {
                    self.r("ent");
                } else if self.ends("eli") {
                    self.r("e");
                } else if self.ends("ousli") {
                    self.r("ous");
                }
            }
            b'o' => {
                if self.ends("ization") {
                    self.r("ize");
                } else if self.ends("ation") {
                    self.r("ate");
                } else if self.ends("ator") {
                    self.r("ate");
                }
            }
            b's' => {
                if self.ends("alism") {
                    self.r("al");
                } else if self.ends("iveness") {
                    self.r("ive");
                } else if self.ends("fulness") {
                    self.r("ful");
                } else if self.ends("ousness") {
                    self.r("ous");
                }
            }
            b't' => {
                if self.ends("aliti") {
                    self.r("al");
                } else if self.ends("iviti") {
                    self.r("ive");
                } else if self.ends("biliti") {
                    self.r("ble");
                }
            }
            b'g' => {
                if self.ends("logi") {
                    self.r("log");
                }
            }
            _ => {}
        }
    }

    /// -ic-, -full, -ness and friends.
    fn step4(&mut self) {
        match self.at(self.k) {
            b'e' => {
                if self.ends("icate") {
                    self.r("ic");
                } else if self.ends("ative") {
                    self.r("");
                } else if self.ends("alize") {
                    self.r("al");
                }
            }
            b'i' => {
                if self.ends("iciti") {
                    self.r("ic");
                }
            }
            b'l' => {
                if self.ends("ical") {
                    self.r("ic");
                } else if self.ends("ful") {
                    self.r("");
                }
            }
            b's' => {
                if self.ends("ness") {
                    self.r("");
                }
            }
            _ => {}
        }
    }

    /// Strip -ant, -ence etc. in context <c>vcvc<v>.
    fn step5(&mut self) {
        if self.k == 0 {
            return;
        }
        let matched = match self.at(self.k - 1) {
            b'a' => self.ends("al"),
            b'c' => self.ends("ance") || self.ends("ence"),
            b'e' => self.ends("er"),
            b'i' => self.ends("ic"),
            b'l' => self.ends("able") || self.ends("ible"),
            // element etc. keep their -ment
            b'n' => {
                self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent")
            }
            b'o' => {
                (self.ends("ion") && self.j >= 0 && matches!(self.at(self.j), b's' | b't'))
                    || self.ends("ou")
            }
            b's' => self.ends("ism"),
            b't' => self.ends("ate") || self.ends("iti"),
            b'u' => self.ends("ous"),
            b'v' => self.ends("ive"),
            b'z' => self.ends("ize"),
            _ => false,
        };
        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Drop a final -e, and -ll -> -l, when m() > 1.
    fn step6(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_consonant(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(word: &str, steps: &[fn(&mut StemBuffer)]) -> String {
        let mut buf = StemBuffer::new(word);
        for step in steps {
            step(&mut buf);
        }
        buf.into_stem()
    }

    #[test]
    fn test_classic_vectors() {
        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("ties", "ti"),
            ("caress", "caress"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("plastered", "plaster"),
            ("motoring", "motor"),
            ("sizing", "size"),
            ("hopping", "hop"),
            ("falling", "fall"),
            ("happy", "happi"),
        ];
        for (word, expected) in cases {
            assert_eq!(stem(word), expected, "stem({})", word);
        }
    }

    #[test]
    fn test_full_pipeline_runs_past_first_steps() {
        // final-e cleanup and -ate removal apply after the early steps
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("relational"), "relat");
    }

    #[test]
    fn test_step_level_outputs() {
        assert_eq!(after("agreed", &[StemBuffer::step1]), "agree");
        assert_eq!(after("disabled", &[StemBuffer::step1]), "disable");
        assert_eq!(after("mating", &[StemBuffer::step1]), "mate");
        assert_eq!(after("milling", &[StemBuffer::step1]), "mill");
        assert_eq!(
            after("relational", &[StemBuffer::step1, StemBuffer::step2, StemBuffer::step3]),
            "relate"
        );
        assert_eq!(
            after("conditional", &[StemBuffer::step1, StemBuffer::step2, StemBuffer::step3]),
            "condition"
        );
    }

    #[test]
    fn test_idempotent_on_stems() {
        for word in [
            "caresses", "ponies", "ties", "caress", "cats", "feed", "plastered", "motoring",
            "sizing", "hopping", "falling", "happy", "relational",
        ] {
            let once = stem(word);
            assert_eq!(stem(&once), once, "stem(stem({}))", word);
        }
        // not a fixed point: the remaining e is stripped again
        assert_eq!(stem("agre"), "agr");
    }

    #[test]
    fn test_later_steps() {
        assert_eq!(stem("generalization"), "gener");
        assert_eq!(stem("triplicate"), "triplic");
        assert_eq!(stem("hopefulness"), "hope");
        assert_eq!(stem("adjustment"), "adjust");
        assert_eq!(stem("adoption"), "adopt");
        assert_eq!(stem("controll"), "control");
        assert_eq!(stem("rate"), "rate");
        assert_eq!(stem("cease"), "ceas");
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        for word in ["", "a", "s", "is", "ed", "ion", "ing", "eed", "aed", "oed", "ies", "sss", "yyy"] {
            let _ = stem(word);
        }
        assert_eq!(stem("ion"), "ion");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("ies"), "i");
    }

    #[test]
    fn test_y_consonant_rules() {
        assert_eq!(stem("toy"), "toi");
        assert_eq!(stem("sky"), "sky");
        assert_eq!(stem("syzygy"), "syzygi");
    }

    #[test]
    fn test_non_ascii_is_returned_unchanged() {
        assert_eq!(stem("Running"), "Running");
        assert_eq!(stem("café"), "café");
    }

    #[test]
    fn test_cache_is_consistent() {
        let mut cache = StemCache::new();
        assert_eq!(cache.stem("running"), "run");
        assert_eq!(cache.stem("running"), stem("running"));
        assert_eq!(cache.len(), 1);
    }
}
