use std::cmp::Ordering;

/// One suggested dictionary word with its edit distance from the query.
#[derive(Eq, Debug, Clone)]
pub struct Candidate {
    pub word: String,
    pub edit: usize,
}

impl Candidate {
    pub fn new(word: String, edit: usize) -> Self {
        Candidate { word, edit }
    }

    pub fn get_word(&self) -> String {
        self.word.to_owned()
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Candidate) -> Ordering {
        if self.edit == other.edit {
            self.word.cmp(&other.word)
        } else {
            self.edit.cmp(&other.edit)
        }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Candidate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Candidate) -> bool {
        self.word == other.word && self.edit == other.edit
    }
}
