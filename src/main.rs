use consolekit::config::{self, Config};
use consolekit::{
    get_input, logging, ConsoleTerminal, KitError, Menu, Table, TableRecord, Terminal,
};
use crossterm::{execute, terminal::SetTitle, tty::IsTty};
use std::io;
use tracing::{debug, info};

const MENU_OPTIONS: &[&str] = &["Create new user", "Search users", "View all users", "Exit"];

#[derive(Debug, Clone)]
struct User {
    name: String,
    surname: String,
    age: u32,
}

impl TableRecord for User {
    fn columns() -> Vec<&'static str> {
        vec!["Name", "Surname", "Age"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.surname.clone(), self.age.to_string()]
    }
}

struct App {
    term: ConsoleTerminal,
    menu: Menu,
    table: Table,
    users: Vec<User>,
}

impl App {
    fn new(config: &Config) -> consolekit::Result<Self> {
        Ok(App {
            term: ConsoleTerminal::new(),
            menu: Menu::new(MENU_OPTIONS.iter().copied(), config.highlight_color)?
                .with_banner(config::APP_TITLE),
            table: Table::new(config.table_width, config.table_indent)?,
            users: Vec::new(),
        })
    }

    fn run(&mut self) -> consolekit::Result<()> {
        if !io::stdin().is_tty() {
            return Err(KitError::Io(io::Error::new(
                io::ErrorKind::Unsupported,
                "the demo needs an interactive terminal",
            )));
        }

        execute!(io::stdout(), SetTitle(config::APP_TITLE))?;
        self.term.clear_screen()?;

        loop {
            match self.menu.await_input(&mut self.term, 0)? {
                0 => self.create_user()?,
                1 => self.search_user()?,
                2 => self.view_users()?,
                _ => break,
            }
        }

        info!(users = self.users.len(), "demo finished");
        Ok(())
    }

    fn create_user(&mut self) -> consolekit::Result<()> {
        let full_name: String = get_input(
            &mut self.term,
            "Enter a first and last name",
            config::DEFAULT_RETRY_MESSAGE,
            |name: &String| name.split_whitespace().count() == 2,
        )?;
        let age: u32 = get_input(
            &mut self.term,
            "Enter age",
            "Input must be a number over 13",
            |age| *age > 13,
        )?;

        let mut names = full_name.split_whitespace().map(str::to_string);
        let user = User {
            name: names.next().unwrap_or_default(),
            surname: names.next().unwrap_or_default(),
            age,
        };
        self.users.push(user);

        self.interstitial("User successfully added")
    }

    fn search_user(&mut self) -> consolekit::Result<()> {
        let name: String = get_input(
            &mut self.term,
            "Enter a first name to search by",
            config::DEFAULT_RETRY_MESSAGE,
            |name: &String| !name.trim().is_empty(),
        )?;

        match self.users.iter().find(|u| u.name == name.trim()) {
            Some(user) => {
                self.table.print_row(&mut self.term, &user.cells(), true)?;
                self.interstitial("Displaying user")
            }
            None => self.interstitial("User not found"),
        }
    }

    fn view_users(&mut self) -> consolekit::Result<()> {
        self.table.build_records(&mut self.term, &self.users)?;
        self.interstitial(&format!("{} found", self.users.len()))
    }

    fn interstitial(&mut self, message: &str) -> consolekit::Result<()> {
        self.term.write_line("")?;
        self.term
            .write_line(&format!("{}, press any key to return to the menu...", message))?;
        self.term.read_key()?;
        self.term.clear_screen()?;
        Ok(())
    }
}

fn main() -> consolekit::Result<()> {
    let config = Config::load();
    logging::init(&config.log_filter);
    debug!(?config, "configuration loaded");

    let mut app = App::new(&config)?;
    app.run().map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })
}
