//! Interactive prompts for desk-ticket
//!
//! Fills in whatever `desk-ticket new` was not given on the command line.
//! Only used when stdin is a terminal.

use crate::core::{Category, Priority};
use crate::error::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Fields of a ticket being drafted interactively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveTicketData {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

/// Prompt-driven ticket drafting
pub struct InteractiveMode {
    theme: ColorfulTheme,
}

impl Default for InteractiveMode {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveMode {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompt for every field that is still missing.
    ///
    /// Values already supplied are kept as-is; category and priority prompts
    /// start on the supplied or configured defaults.
    pub fn complete_ticket(
        &self,
        title: Option<String>,
        description: Option<String>,
        category: Category,
        priority: Priority,
    ) -> Result<InteractiveTicketData> {
        let prompt_choices = title.is_none() || description.is_none();

        let title = match title {
            Some(title) => title,
            None => self.prompt_text("Title (brief description of the issue)")?,
        };
        let description = match description {
            Some(description) => description,
            None => self.prompt_text("Description (what is happening?)")?,
        };

        let (category, priority) = if prompt_choices {
            (
                self.select("Category", &Category::ALL, category)?,
                self.select("Priority", &Priority::ALL, priority)?,
            )
        } else {
            (category, priority)
        };

        Ok(InteractiveTicketData {
            title,
            description,
            category,
            priority,
        })
    }

    fn prompt_text(&self, prompt: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("This field is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(value)
    }

    fn select<T>(&self, prompt: &str, items: &[T], default: T) -> Result<T>
    where
        T: Copy + PartialEq + ToString,
    {
        let labels: Vec<String> = items.iter().map(ToString::to_string).collect();
        let start = items.iter().position(|item| *item == default).unwrap_or(0);

        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(start)
            .interact()?;
        Ok(items[index])
    }
}
