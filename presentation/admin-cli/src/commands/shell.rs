use std::path::PathBuf;
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use business::application::store::ProductStore;
use business::domain::admin::gate::AdminSession;
use business::domain::product::value_objects::ProductId;

use crate::commands::admin::{self, ProductEdit};
use crate::ui::delete_confirmation::{CONFIRMATION_WINDOW, DeleteConfirmation, DeleteDecision};
use crate::ui::gallery::render_gallery;

const HELP: &str = "\
Commands:
  list                                          show the catalog
  refresh                                       reload the catalog
  add <title> | <description> | <price> | <image url or file>
  update <id> <field>=<value> [| <field>=<value> ...]
                                                fields: title, description, price, image
  delete <id>                                   run twice within 5 s to confirm
  upload <file>                                 upload an image and print its URL
  lock | unlock <password>
  help | quit";

/// An image given either as an address or as a local file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
}

impl ImageSource {
    pub fn from_arg(raw: &str) -> Self {
        let raw = raw.trim();
        let is_url = url::Url::parse(raw)
            .map(|u| matches!(u.scheme(), "http" | "https" | "file"))
            .unwrap_or(false);
        if is_url {
            ImageSource::Url(raw.to_string())
        } else {
            ImageSource::File(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Refresh,
    Add {
        title: String,
        description: String,
        price: String,
        image: ImageSource,
    },
    Update {
        id: String,
        title: Option<String>,
        description: Option<String>,
        price: Option<String>,
        image: Option<ImageSource>,
    },
    Delete(String),
    Upload(PathBuf),
    Lock,
    Unlock(String),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(ShellCommand::List),
            "refresh" => Ok(ShellCommand::Refresh),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "lock" => Ok(ShellCommand::Lock),
            "unlock" => Ok(ShellCommand::Unlock(rest.to_string())),
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err("usage: delete <id>".to_string());
                }
                Ok(ShellCommand::Delete(rest.to_string()))
            }
            "upload" => {
                if rest.is_empty() {
                    return Err("usage: upload <file>".to_string());
                }
                Ok(ShellCommand::Upload(PathBuf::from(rest)))
            }
            "add" => Self::parse_add(rest),
            "update" | "edit" => Self::parse_update(rest),
            "" => Err("type 'help' for commands".to_string()),
            other => Err(format!("unknown command '{}'; type 'help'", other)),
        }
    }

    fn parse_add(rest: &str) -> Result<Self, String> {
        let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
        let [title, description, price, image] = parts.as_slice() else {
            return Err("usage: add <title> | <description> | <price> | <image>".to_string());
        };

        Ok(ShellCommand::Add {
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            image: ImageSource::from_arg(image),
        })
    }

    fn parse_update(rest: &str) -> Result<Self, String> {
        let (id, assignments) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if id.is_empty() {
            return Err("usage: update <id> <field>=<value> [| ...]".to_string());
        }

        let mut title = None;
        let mut description = None;
        let mut price = None;
        let mut image = None;

        for assignment in assignments.split('|').map(str::trim).filter(|a| !a.is_empty()) {
            let Some((field, value)) = assignment.split_once('=') else {
                return Err(format!("expected <field>=<value>, got '{}'", assignment));
            };
            let value = value.trim().to_string();
            match field.trim().to_ascii_lowercase().as_str() {
                "title" => title = Some(value),
                "description" => description = Some(value),
                "price" => price = Some(value),
                "image" => image = Some(ImageSource::from_arg(&value)),
                other => return Err(format!("unknown field '{}'", other)),
            }
        }

        Ok(ShellCommand::Update {
            id: id.to_string(),
            title,
            description,
            price,
            image,
        })
    }

    fn is_mutation(&self) -> bool {
        matches!(
            self,
            ShellCommand::Add { .. }
                | ShellCommand::Update { .. }
                | ShellCommand::Delete(_)
                | ShellCommand::Upload(_)
        )
    }
}

fn split_image(image: Option<ImageSource>) -> (Option<String>, Option<PathBuf>) {
    match image {
        Some(ImageSource::Url(url)) => (Some(url), None),
        Some(ImageSource::File(path)) => (None, Some(path)),
        None => (None, None),
    }
}

/// Line-oriented admin session over stdin.
pub async fn run(store: &ProductStore, mut session: AdminSession) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut confirmation = DeleteConfirmation::default();

    println!("{}", HELP);
    if let Some(error) = store.last_error() {
        println!("! {} Type 'refresh' to try again.", error);
    }

    loop {
        stdout.write_all(b"storefront> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        if command.is_mutation()
            && let Err(e) = session.require_unlocked()
        {
            tracing::debug!(error = %e, "Mutation refused while locked");
            println!("Admin mode is locked; use 'unlock <password>'.");
            continue;
        }

        if let Err(e) = execute(store, &mut session, &mut confirmation, command.clone()).await {
            println!("! {}", e);
        }
        if command == ShellCommand::Quit {
            break;
        }
    }

    Ok(())
}

async fn execute(
    store: &ProductStore,
    session: &mut AdminSession,
    confirmation: &mut DeleteConfirmation,
    command: ShellCommand,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::List => print!("{}", render_gallery(&store.snapshot())),
        ShellCommand::Refresh => {
            store.refresh().await.map_err(admin::product_failure)?;
            println!("Loaded {} products.", store.products().len());
        }
        ShellCommand::Add {
            title,
            description,
            price,
            image,
        } => {
            let (image_url, image) = split_image(Some(image));
            admin::add(store, title, description, price, image_url, image).await?;
        }
        ShellCommand::Update {
            id,
            title,
            description,
            price,
            image,
        } => {
            let (image_url, image) = split_image(image);
            let edit = ProductEdit {
                title,
                description,
                price,
                image_url,
                image,
            };
            admin::update(store, id, edit).await?;
        }
        ShellCommand::Delete(id) => {
            let product_id = ProductId::new(id.as_str());
            match confirmation.request(&product_id, Instant::now()) {
                DeleteDecision::Armed => {
                    let title = store
                        .find(&product_id)
                        .map(|p| p.title)
                        .unwrap_or_else(|| id.clone());
                    println!(
                        "Delete '{}'? Repeat 'delete {}' within {} s to confirm.",
                        title,
                        id,
                        CONFIRMATION_WINDOW.as_secs()
                    );
                }
                DeleteDecision::Confirmed => admin::delete(store, id, true).await?,
            }
        }
        ShellCommand::Upload(path) => admin::upload(store, path).await?,
        ShellCommand::Lock => {
            session.lock();
            confirmation.reset();
            println!("Locked.");
        }
        ShellCommand::Unlock(password) => match session.unlock(&password) {
            Ok(()) => println!("Unlocked."),
            Err(_) => println!("Incorrect password!"),
        },
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_add_with_url_image() {
        let command = ShellCommand::parse(
            "add Crochet Poncho | Stylish poncho | 27,200 | https://images.example.com/poncho.jpeg",
        )
        .unwrap();

        assert_eq!(
            command,
            ShellCommand::Add {
                title: "Crochet Poncho".to_string(),
                description: "Stylish poncho".to_string(),
                price: "27,200".to_string(),
                image: ImageSource::Url("https://images.example.com/poncho.jpeg".to_string()),
            }
        );
    }

    #[test]
    fn should_treat_non_url_image_as_file() {
        let command = ShellCommand::parse("add Hat | Bucket hat | 12800 | ./photos/hat.png").unwrap();

        let ShellCommand::Add { image, .. } = command else {
            panic!("expected add");
        };
        assert_eq!(image, ImageSource::File(PathBuf::from("./photos/hat.png")));
    }

    #[test]
    fn should_reject_add_with_missing_fields() {
        assert!(ShellCommand::parse("add Hat | Bucket hat | 12800").is_err());
    }

    #[test]
    fn should_parse_update_with_only_given_fields() {
        let command = ShellCommand::parse("update p-1 price=9500 | title = Granny Bag").unwrap();

        assert_eq!(
            command,
            ShellCommand::Update {
                id: "p-1".to_string(),
                title: Some("Granny Bag".to_string()),
                description: None,
                price: Some("9500".to_string()),
                image: None,
            }
        );
    }

    #[test]
    fn should_reject_unknown_update_field() {
        let result = ShellCommand::parse("update p-1 colour=red");

        assert_eq!(result, Err("unknown field 'colour'".to_string()));
    }

    #[test]
    fn should_require_id_for_delete() {
        assert!(ShellCommand::parse("delete").is_err());
        assert_eq!(
            ShellCommand::parse("delete p-9").unwrap(),
            ShellCommand::Delete("p-9".to_string())
        );
    }

    #[test]
    fn should_flag_only_writes_as_mutations() {
        assert!(ShellCommand::parse("delete p-1").unwrap().is_mutation());
        assert!(ShellCommand::parse("upload a.png").unwrap().is_mutation());
        assert!(!ShellCommand::parse("refresh").unwrap().is_mutation());
        assert!(!ShellCommand::parse("LIST").unwrap().is_mutation());
    }
}
