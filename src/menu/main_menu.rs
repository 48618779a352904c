use crate::config::save::save_settings;
use crate::config::types::{Config, Language, OrderMode, UserSettings};
use crate::menu::handlers::run_image_shuffler;
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;
use std::fmt;

pub fn show_main_menu(term: &Term, config: &mut Config) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_shuffler"),
        t!("main_menu.opt_settings"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_image_shuffler(term, config)?;
            Ok(true)
        }
        Some(1) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(2) | None => Ok(false),
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style(t!("settings.title")).cyan().bold());
        println!("{}", style(t!("common.esc_hint")).dim());

        let options = vec![
            t!("settings.opt_order"),
            t!("settings.opt_language"),
            t!("settings.back"),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("settings.prompt"))
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => show_order_menu(term, config)?,
            Some(1) => show_language_menu(term, config)?,
            Some(2) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 預設排序方式選單
fn show_order_menu(term: &Term, config: &mut Config) -> Result<()> {
    let modes = [OrderMode::Name, OrderMode::Random];
    let Some(selected) = select_setting(
        term,
        &t!("settings.order.title"),
        &t!("settings.order.prompt"),
        &modes,
        config.settings.order_mode,
    )?
    else {
        return Ok(());
    };

    config.settings.order_mode = selected;
    save_and_report(&config.settings, selected)
}

/// 語言設定選單；切換後立即套用
fn show_language_menu(term: &Term, config: &mut Config) -> Result<()> {
    let languages = [Language::EnUs, Language::ZhTw, Language::JaJp];
    let Some(selected) = select_setting(
        term,
        &t!("settings.language.title"),
        &t!("settings.language.prompt"),
        &languages,
        config.settings.language,
    )?
    else {
        return Ok(());
    };

    config.settings.language = selected;
    rust_i18n::set_locale(selected.as_str());
    save_and_report(&config.settings, selected)
}

/// 從選項中挑選一個設定值
///
/// 按 ESC 或選擇目前的值時回傳 `None`
fn select_setting<T>(
    term: &Term,
    title: &str,
    prompt: &str,
    choices: &[T],
    current: T,
) -> Result<Option<T>>
where
    T: Copy + PartialEq + fmt::Display,
{
    term.clear_screen()?;

    println!("{}", style(title).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());
    println!(
        "\n{} {}\n",
        style(t!("settings.current")).dim(),
        current
    );

    let items: Vec<String> = choices.iter().map(ToString::to_string).collect();
    let default_index = choices.iter().position(|&c| c == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    Ok(selection
        .map(|index| choices[index])
        .filter(|&selected| selected != current))
}

fn save_and_report(settings: &UserSettings, selected: impl fmt::Display) -> Result<()> {
    save_settings(settings)?;
    println!("\n{} {}", style(t!("settings.saved")).green(), selected);
    std::thread::sleep(std::time::Duration::from_secs(1));
    Ok(())
}
