// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Numbered menus and the loop that runs them.

use crate::console::Console;
use crate::error::MenuError;
use crate::types::{Description, Key};
use indexmap::IndexMap;
use tracing::debug;

/// Message printed when the typed key matches no entry.
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid selection. Please, try again...";

/// Prompt shown while waiting for a selection.
pub const SELECTION_PROMPT: &str = " ";

/// Callback bound to a menu entry.
///
/// It receives the caller's context and the console the menu runs on.
pub type Action<C, E> = Box<dyn Fn(&mut C, &mut dyn Console) -> Result<(), E>>;

/// A selectable line of a menu.
///
/// Entries are only obtained through [`MenuEntry::create`] and
/// [`MenuEntry::create_exit`], which validate the key and description.
pub struct MenuEntry<C, E> {
    key: Key,
    description: Description,
    action: Action<C, E>,
    is_exit: bool,
}

impl<C, E> MenuEntry<C, E> {
    /// Creates an entry that keeps the menu running after `action`.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidKey` or `MenuError::InvalidDescription` if
    /// either text is invalid.
    pub fn create<F>(key: &str, description: &str, action: F) -> Result<Self, MenuError>
    where
        F: Fn(&mut C, &mut dyn Console) -> Result<(), E> + 'static,
    {
        Self::build(key, description, Box::new(action), false)
    }

    /// Creates an entry that leaves the menu after `action`.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidKey` or `MenuError::InvalidDescription` if
    /// either text is invalid.
    pub fn create_exit<F>(key: &str, description: &str, action: F) -> Result<Self, MenuError>
    where
        F: Fn(&mut C, &mut dyn Console) -> Result<(), E> + 'static,
    {
        Self::build(key, description, Box::new(action), true)
    }

    fn build(
        key: &str,
        description: &str,
        action: Action<C, E>,
        is_exit: bool,
    ) -> Result<Self, MenuError> {
        Ok(Self {
            key: Key::new(key)?,
            description: Description::new(description)?,
            action,
            is_exit,
        })
    }

    /// Returns the selection key.
    #[must_use]
    pub const fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns whether selecting this entry leaves the menu.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        self.is_exit
    }
}

impl<C, E> std::fmt::Debug for MenuEntry<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuEntry")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("is_exit", &self.is_exit)
            .finish_non_exhaustive()
    }
}

/// A titled list of entries keyed by unique [`Key`]s.
///
/// Built once through [`MenuBuilder`] and immutable afterwards. Every menu
/// has at least one exit entry.
pub struct Menu<C, E> {
    description: Description,
    entries: IndexMap<Key, MenuEntry<C, E>>,
}

impl<C, E> Menu<C, E> {
    /// Starts building a menu titled `description`.
    #[must_use]
    pub fn builder(description: Description) -> MenuBuilder<C, E> {
        MenuBuilder::new(description)
    }

    /// Returns the menu title.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Iterates over the entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry<C, E>> {
        self.entries.values()
    }
}

impl<C, E> Menu<C, E>
where
    E: From<MenuError>,
{
    /// Runs the menu until an exit entry has been selected.
    ///
    /// Each round prints the menu, waits for a valid key (printing
    /// [`INVALID_SELECTION_MESSAGE`] and asking again on anything else), then
    /// calls the selected entry's action.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an action, or a `MenuError` (for
    /// instance `InputClosed`) converted into `E`.
    pub fn run(&self, console: &mut dyn Console, context: &mut C) -> Result<(), E> {
        loop {
            self.render(console);
            let entry: &MenuEntry<C, E> = self.select(console)?;
            debug!(
                menu = %self.description,
                key = %entry.key,
                entry = %entry.description,
                "Menu entry selected"
            );
            (entry.action)(context, console)?;
            if entry.is_exit {
                return Ok(());
            }
        }
    }

    fn render(&self, console: &mut dyn Console) {
        let border: String = "*".repeat(self.description.value().chars().count() + 8);
        console.print(&border);
        console.print(&format!("*** {} ***", self.description));
        console.print(&border);
        for entry in self.entries.values() {
            console.print(&format!("{}:\t{}", entry.key, entry.description));
        }
    }

    fn select(&self, console: &mut dyn Console) -> Result<&MenuEntry<C, E>, MenuError> {
        loop {
            let line: String = console.read_line(SELECTION_PROMPT)?;
            let entry: Option<&MenuEntry<C, E>> = Key::new(line.trim())
                .ok()
                .and_then(|key| self.entries.get(&key));
            match entry {
                Some(entry) => return Ok(entry),
                None => console.print(INVALID_SELECTION_MESSAGE),
            }
        }
    }
}

impl<C, E> std::fmt::Debug for Menu<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("description", &self.description)
            .field("entries", &self.entries.values().collect::<Vec<_>>())
            .finish()
    }
}

/// Single-use builder for [`Menu`].
///
/// Entry keys must be unique and the finished menu must contain an exit
/// entry. After [`MenuBuilder::build`] succeeds every further call fails with
/// `MenuError::BuilderExhausted`.
pub struct MenuBuilder<C, E> {
    menu: Option<Menu<C, E>>,
}

impl<C, E> MenuBuilder<C, E> {
    /// Creates a builder for a menu titled `description`.
    #[must_use]
    pub fn new(description: Description) -> Self {
        Self {
            menu: Some(Menu {
                description,
                entries: IndexMap::new(),
            }),
        }
    }

    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::DuplicateKey` if an entry with the same key was
    /// already added, and `MenuError::BuilderExhausted` after `build`.
    pub fn with_entry(&mut self, entry: MenuEntry<C, E>) -> Result<&mut Self, MenuError> {
        let menu: &mut Menu<C, E> = self.menu.as_mut().ok_or(MenuError::BuilderExhausted)?;
        if menu.entries.contains_key(&entry.key) {
            return Err(MenuError::DuplicateKey(entry.key.value().to_string()));
        }
        menu.entries.insert(entry.key.clone(), entry);
        Ok(self)
    }

    /// Produces the menu.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::MissingExit` if no entry is an exit entry (the
    /// builder stays usable), and `MenuError::BuilderExhausted` if the menu
    /// was already built.
    pub fn build(&mut self) -> Result<Menu<C, E>, MenuError> {
        let has_exit: bool = self
            .menu
            .as_ref()
            .ok_or(MenuError::BuilderExhausted)?
            .entries
            .values()
            .any(|entry| entry.is_exit);
        if !has_exit {
            return Err(MenuError::MissingExit);
        }
        self.menu.take().ok_or(MenuError::BuilderExhausted)
    }
}

impl<C, E> std::fmt::Debug for MenuBuilder<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBuilder")
            .field("menu", &self.menu)
            .finish()
    }
}
