use mikro_events::{Credentials, ServiceDescriptor};
use std::path::{Path, PathBuf};

use super::state::{LoginField, LoginPhase, TextInput};

/// The variant-specific half of the login form.
#[derive(Debug)]
pub enum LoginVariant {
    Local {
        file_input: TextInput,
        browser: Option<FileBrowser>,
    },
    Remote {
        services: Vec<ServiceDescriptor>,
        selected_service: usize,
        password_input: TextInput,
    },
}

/// Login form state plus the controller phase. The form owns the collected
/// credentials until a connect attempt consumes a copy of them.
#[derive(Debug)]
pub struct LoginState {
    pub variant: LoginVariant,
    pub username_input: TextInput,
    pub focused_field: LoginField,
    pub phase: LoginPhase,
    /// Inline validation error (e.g. empty username); cleared on edit.
    pub error: Option<String>,
}

impl LoginState {
    pub fn local() -> Self {
        Self {
            variant: LoginVariant::Local {
                file_input: TextInput::new(),
                browser: None,
            },
            username_input: TextInput::new(),
            focused_field: LoginField::Username,
            phase: LoginPhase::Idle,
            error: None,
        }
    }

    pub fn remote(services: Vec<ServiceDescriptor>) -> Self {
        Self {
            variant: LoginVariant::Remote {
                services,
                selected_service: 0,
                password_input: TextInput::new(),
            },
            username_input: TextInput::new(),
            focused_field: LoginField::Service,
            phase: LoginPhase::Idle,
            error: None,
        }
    }

    /// Whether the form accepts edits. All inputs enable and disable as a
    /// unit: only the Idle phase is editable.
    pub fn editable(&self) -> bool {
        self.phase == LoginPhase::Idle
    }

    pub fn next_field(&mut self) {
        self.focused_field = match (&self.variant, self.focused_field) {
            (LoginVariant::Local { .. }, LoginField::Username) => LoginField::File,
            (LoginVariant::Local { .. }, _) => LoginField::Username,
            (LoginVariant::Remote { .. }, LoginField::Service) => LoginField::Username,
            (LoginVariant::Remote { .. }, LoginField::Username) => LoginField::Password,
            (LoginVariant::Remote { .. }, _) => LoginField::Service,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused_field = match (&self.variant, self.focused_field) {
            (LoginVariant::Local { .. }, LoginField::Username) => LoginField::File,
            (LoginVariant::Local { .. }, _) => LoginField::Username,
            (LoginVariant::Remote { .. }, LoginField::Service) => LoginField::Password,
            (LoginVariant::Remote { .. }, LoginField::Username) => LoginField::Service,
            (LoginVariant::Remote { .. }, _) => LoginField::Username,
        };
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match (self.focused_field, &mut self.variant) {
            (LoginField::Username, _) => Some(&mut self.username_input),
            (LoginField::File, LoginVariant::Local { file_input, .. }) => Some(file_input),
            (LoginField::Password, LoginVariant::Remote { password_input, .. }) => {
                Some(password_input)
            }
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.error = None;
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    pub fn move_cursor(&mut self, left: bool) {
        if let Some(input) = self.focused_input() {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    pub fn cursor_home_end(&mut self, home: bool) {
        if let Some(input) = self.focused_input() {
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    pub fn select_service(&mut self, next: bool) {
        if let LoginVariant::Remote {
            services,
            selected_service,
            ..
        } = &mut self.variant
        {
            if services.is_empty() {
                return;
            }
            *selected_service = if next {
                (*selected_service + 1) % services.len()
            } else {
                (*selected_service + services.len() - 1) % services.len()
            };
        }
    }

    /// Assemble credentials from the current field contents. None only when
    /// the remote variant has no services to select from.
    pub fn credentials(&self) -> Option<Credentials> {
        match &self.variant {
            LoginVariant::Local { file_input, .. } => Some(Credentials::Local {
                username: self.username_input.value.clone(),
                path: PathBuf::from(&file_input.value),
            }),
            LoginVariant::Remote {
                services,
                selected_service,
                password_input,
            } => Some(Credentials::Remote {
                service: services.get(*selected_service)?.clone(),
                username: self.username_input.value.clone(),
                password: password_input.value.clone(),
            }),
        }
    }

    pub fn open_file_browser(&mut self) {
        if let LoginVariant::Local {
            file_input,
            browser,
        } = &mut self.variant
        {
            *browser = Some(FileBrowser::open(&file_input.value));
        }
    }

    pub fn close_file_browser(&mut self) {
        if let LoginVariant::Local { browser, .. } = &mut self.variant {
            *browser = None;
        }
    }

    /// Take the browser's selection, if any, into the file path input.
    pub fn apply_file_selection(&mut self, path: PathBuf) {
        if let LoginVariant::Local {
            file_input,
            browser,
        } = &mut self.variant
        {
            *file_input = TextInput::from_str(&path.to_string_lossy());
            *browser = None;
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// File-selection overlay for the local login form. Shows directories and
/// `.json` files only; this is a display filter, not an enforcement.
#[derive(Debug)]
pub struct FileBrowser {
    pub dir: PathBuf,
    pub entries: Vec<BrowserEntry>,
    pub selected: usize,
}

impl FileBrowser {
    /// Start from the directory of the typed path when it exists, otherwise
    /// from the current working directory.
    pub fn open(typed_path: &str) -> Self {
        let typed = PathBuf::from(typed_path);
        let dir = if typed.is_dir() {
            typed
        } else {
            typed
                .parent()
                .filter(|p| p.is_dir())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| {
                    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
                })
        };
        let entries = Self::read_entries(&dir);
        Self {
            dir,
            entries,
            selected: 0,
        }
    }

    fn read_entries(dir: &Path) -> Vec<BrowserEntry> {
        let mut entries: Vec<BrowserEntry> = std::fs::read_dir(dir)
            .map(|iter| {
                iter.filter_map(|entry| {
                    let entry = entry.ok()?;
                    let name = entry.file_name().to_string_lossy().to_string();
                    if name.starts_with('.') {
                        return None;
                    }
                    let path = entry.path();
                    let is_dir = path.is_dir();
                    if !is_dir && !has_json_extension(&name) {
                        return None;
                    }
                    Some(BrowserEntry { name, path, is_dir })
                })
                .collect()
            })
            .unwrap_or_default();
        // Directories first, then alphabetical within each group.
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then(a.name.cmp(&b.name)));
        entries
    }

    pub fn move_selection(&mut self, down: bool) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(self.entries.len() - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }

    pub fn ascend(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.dir = parent;
            self.entries = Self::read_entries(&self.dir);
            self.selected = 0;
        }
    }

    /// Descend into the selected directory, or return the selected file's
    /// absolute path.
    pub fn enter(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.selected)?.clone();
        if entry.is_dir {
            self.dir = entry.path;
            self.entries = Self::read_entries(&self.dir);
            self.selected = 0;
            None
        } else {
            Some(
                entry
                    .path
                    .canonicalize()
                    .unwrap_or(entry.path),
            )
        }
    }
}

fn has_json_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
