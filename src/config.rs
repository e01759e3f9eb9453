static DEFAULT_DICT_PATH: &str = "/usr/share/dict/words";

/// Run configuration; currently just where the dictionary lives.
#[derive(Clone)]
pub struct Config {
    override_dict: String,
}

impl Config {
    #[inline]
    pub fn new() -> Config {
        Config {
            override_dict: String::new(),
        }
    }

    pub fn with_dict_path(path: &str) -> Config {
        Config {
            override_dict: path.to_owned(),
        }
    }

    pub fn get_dict_path(&self) -> String {
        if self.override_dict.is_empty() {
            DEFAULT_DICT_PATH.to_owned()
        } else {
            self.override_dict.to_owned()
        }
    }

    pub fn set_dict_path(&mut self, path: &str) {
        self.override_dict = path.to_owned();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
