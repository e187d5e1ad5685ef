use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::io_adapters::Prompt;
use crate::menu::{self, MenuChoice};
use crate::text::trim;
use anyhow::Result;
use rustyline::DefaultEditor;
use std::io::Write;

/// The interactive course planner.
///
/// Owns the [`Catalog`] for the whole session and drives it from menu choices.
/// Loading is the only operation that mutates the catalog; listing and
/// lookups only read it.
///
/// Example
/// ```
/// use course_planner::{Planner, ReaderPrompt};
/// use std::io::Cursor;
///
/// let mut planner = Planner::default();
/// let mut prompt = ReaderPrompt::new(Cursor::new("2\n9\n"), std::io::sink());
/// let mut out = Vec::new();
/// planner.run(&mut prompt, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Please load the data first."));
/// ```
#[derive(Debug, Default)]
pub struct Planner {
    catalog: Catalog,
    should_exit: bool,
}

impl Planner {
    /// The catalog driven by this planner.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load a course file, reporting a failure on `out` instead of returning it.
    ///
    /// Returns whether the load succeeded.
    pub fn load(&mut self, path: &str, out: &mut dyn Write) -> Result<bool> {
        match self.catalog.load(trim(path)) {
            Ok(_) => Ok(true),
            Err(err) => {
                writeln!(out, "Error: {}.", err)?;
                writeln!(out)?;
                Ok(false)
            }
        }
    }

    /// Run one menu choice. Extra input (file name, course number) is asked for
    /// through `prompt`.
    pub fn execute(
        &mut self,
        choice: MenuChoice,
        prompt: &mut dyn Prompt,
        out: &mut dyn Write,
    ) -> Result<()> {
        match choice {
            MenuChoice::Load => {
                out.flush()?;
                match prompt.ask(menu::FILE_PROMPT)? {
                    Some(path) => {
                        self.load(&path, out)?;
                    }
                    None => self.should_exit = true,
                }
            }
            MenuChoice::List => match self.catalog.list() {
                Ok(courses) => menu::write_course_list(out, &courses)?,
                Err(err) => report(out, &err)?,
            },
            MenuChoice::Show => {
                if !self.catalog.is_loaded() {
                    return report(out, &CatalogError::NotLoaded);
                }
                out.flush()?;
                let Some(course_id) = prompt.ask(menu::COURSE_PROMPT)? else {
                    self.should_exit = true;
                    return Ok(());
                };
                match self.catalog.lookup(&course_id) {
                    Ok(course) => menu::write_course(out, course)?,
                    Err(err) => report(out, &err)?,
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "{}", menu::FAREWELL)?;
                self.should_exit = true;
            }
        }
        Ok(())
    }

    /// Menu loop: greet, then show the menu and run choices until the user
    /// exits or input runs out.
    pub fn run(&mut self, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", menu::GREETING)?;
        writeln!(out)?;

        while !self.should_exit {
            menu::write_menu(out)?;
            out.flush()?;

            let Some(answer) = prompt.ask(menu::CHOICE_PROMPT)? else {
                break;
            };
            match answer.parse::<MenuChoice>() {
                Ok(choice) => self.execute(choice, prompt, out)?,
                Err(err) => {
                    log::debug!("rejected menu answer {:?}", answer);
                    writeln!(out, "{}", err)?;
                    writeln!(out)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Run the menu loop on the terminal.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        self.run(&mut rl, &mut std::io::stdout())
    }
}

fn report(out: &mut dyn Write, err: &CatalogError) -> Result<()> {
    writeln!(out, "{}", err)?;
    writeln!(out)?;
    Ok(())
}
