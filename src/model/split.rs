use serde::{Deserialize, Serialize};

/// Which half of a project's file partition a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// Resolve a split name the way splits files are authored: the literal
    /// `"train"` selects the train split, any other name selects test.
    /// There is no third case.
    pub fn from_name(name: &str) -> Split {
        if name == "train" {
            Split::Train
        } else {
            Split::Test
        }
    }

    /// The canonical name of this split
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
