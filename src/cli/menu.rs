// src/cli/menu.rs
use inquire::{InquireError, MultiSelect, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::widget::GeneratorWidget;
use crate::models::CharacterClass;
use crate::utils;

const GENERATE: &str = "🔐  Generate password";
const LENGTH: &str = "📏  Change length";
const CLASSES: &str = "🔤  Choose character classes";
const COPY: &str = "📋  Show plain password";
const EXIT: &str = "🚪  Exit";

/// Text block shown after every event: the value on display and its strength.
pub fn render_widget(widget: &GeneratorWidget) -> String {
    let strength = widget.strength();
    format!(
        "\n  {}\n  length {} | classes {}\n  {} {}\n",
        console::style(widget.displayed()).bold(),
        widget.length(),
        widget.classes(),
        utils::styled_bars(&strength),
        utils::styled_label(&strength),
    )
}

/// Menu entries; generating is not offered while no class is selected.
pub fn menu_options(widget: &GeneratorWidget) -> Vec<&'static str> {
    let mut options = Vec::with_capacity(5);
    if widget.can_generate() {
        options.push(GENERATE);
    }
    options.push(LENGTH);
    options.push(CLASSES);
    if widget.copyable().is_some() {
        options.push(COPY);
    }
    options.push(EXIT);
    options
}

fn class_label(class: CharacterClass) -> String {
    format!("{:<7} {}", class.name(), class.alphabet())
}

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    let mut widget = GeneratorWidget::new(config);
    print!("{}", render_widget(&widget));

    while !should_exit.load(Ordering::SeqCst) {
        let choice = match Select::new("What next?", menu_options(&widget)).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            GENERATE => {
                widget.regenerate();
            }
            LENGTH => {
                let (min, max) = widget.bounds();
                let input = Text::new("Password length:")
                    .with_default(&widget.length().to_string())
                    .with_help_message(&format!("{}-{}", min, max))
                    .prompt()?;
                match input.trim().parse::<usize>() {
                    Ok(length) => {
                        if let Err(e) = widget.set_length(length) {
                            println!("❌ {}", e);
                        }
                    }
                    Err(_) => println!("❌ Invalid number: {}", input.trim()),
                }
            }
            CLASSES => {
                let labels: Vec<String> = CharacterClass::ALL.into_iter().map(class_label).collect();
                let defaults: Vec<usize> = CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(_, class)| widget.classes().contains(*class))
                    .map(|(i, _)| i)
                    .collect();
                let selected = MultiSelect::new("Include:", labels.clone())
                    .with_default(&defaults)
                    .prompt()?;
                // One toggle per checkbox that changed
                for (class, label) in CharacterClass::ALL.into_iter().zip(labels.iter()) {
                    if selected.contains(label) != widget.classes().contains(class) {
                        widget.toggle_class(class);
                    }
                }
            }
            COPY => {
                if let Some(password) = widget.copyable() {
                    println!("{}", password);
                }
                continue;
            }
            _ => break,
        }

        print!("{}", render_widget(&widget));
    }

    log::info!("Interactive session finished");
    Ok(())
}
