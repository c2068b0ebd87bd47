//! Document segmentation on boundary markers.

use serde::Serialize;

use crate::normalize::Token;

/// Ordered word tokens between two boundary markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Position in the corpus, starting at 0.
    pub index: usize,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// All documents of one run, in stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Split a token stream into documents.
    ///
    /// Every marker closes the current document, empty or not. Tokens after
    /// the last marker form one more document only if there are any.
    pub fn segment(tokens: &[Token]) -> Self {
        let mut documents = Vec::new();
        let mut current = Vec::new();

        for token in tokens {
            match token {
                Token::Word(w) => current.push(w.clone()),
                Token::Boundary => {
                    documents.push(Document {
                        index: documents.len(),
                        tokens: std::mem::take(&mut current),
                    });
                }
            }
        }
        if !current.is_empty() {
            documents.push(Document {
                index: documents.len(),
                tokens: current,
            });
        }

        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Word tokens of every document in order, markers excluded.
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.documents
            .iter()
            .flat_map(|d| d.tokens.iter().map(String::as_str))
    }

    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|t| {
                if t == ";" {
                    Token::Boundary
                } else {
                    Token::word(t)
                }
            })
            .collect()
    }

    #[test]
    fn test_trailing_document_kept() {
        let corpus = Corpus::segment(&stream("the cats ; sat ; the cat runs"));
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.documents[0].tokens, vec!["the", "cats"]);
        assert_eq!(corpus.documents[1].tokens, vec!["sat"]);
        assert_eq!(corpus.documents[2].tokens, vec!["the", "cat", "runs"]);
        assert_eq!(corpus.documents[2].index, 2);
    }

    #[test]
    fn test_no_trailing_document_after_final_marker() {
        let corpus = Corpus::segment(&stream("a b ; c ;"));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_consecutive_markers_make_empty_document() {
        let corpus = Corpus::segment(&stream("a ; ; b"));
        assert_eq!(corpus.len(), 3);
        assert!(corpus.documents[1].is_empty());
    }

    #[test]
    fn test_empty_stream() {
        assert!(Corpus::segment(&[]).is_empty());
        assert_eq!(Corpus::segment(&stream(";")).len(), 1);
    }

    #[test]
    fn test_more_than_sixteen_documents() {
        let text = (0..40).map(|i| format!("w{} ;", i)).collect::<Vec<_>>().join(" ");
        let corpus = Corpus::segment(&stream(&text));
        assert_eq!(corpus.len(), 40);
    }

    #[test]
    fn test_segmentation_invariants() {
        let tokens = stream("x y ; ; z ; w v u ; t");
        let corpus = Corpus::segment(&tokens);
        let markers = tokens.iter().filter(|t| t.is_boundary()).count();
        assert!(corpus.len() == markers || corpus.len() == markers + 1);

        let words: Vec<&str> = tokens.iter().filter_map(Token::as_word).collect();
        assert_eq!(corpus.flattened().collect::<Vec<_>>(), words);
        assert_eq!(corpus.token_count(), words.len());
    }
}
