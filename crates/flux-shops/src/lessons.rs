//! Lessons
//!
//! Each lesson builds its own store, subscribes a listener that logs every
//! committed state, runs a short scenario and returns the final state.

use crate::actions::posts::{post_added, reaction_added};
use crate::actions::shop::{add_topping, order_burger, order_pizza};
use crate::actions::todos::{add_todo, remove_todo, update_todo};
use crate::actions::{Action, PlatesAction, TodoAction};
use crate::domain_models::{Post, ReactionKind};
use crate::reducers::{
    blog_reducer::blog_reducer, pizza_reducer, plates_reducer, products_reducer,
    shop_reducer::shop_reducer, todos_reducer,
};
use crate::selectors;
use crate::services::{FixtureBlog, FixtureCatalog};
use crate::state::{BlogState, PizzaState, PlatesState, ProductsState, ShopState, TodosState};
use crate::thunks::{fetch_posts, fetch_products, fetch_users};
use anyhow::{Context, Result};
use flux_config::AppConfig;
use flux_store::{fallible, LoggingMiddleware, Store, Subscription, ThunkMiddleware};
use log::Level;
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Level of the logging middleware in lessons, visible with the default config
const LESSON_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Lesson {
    /// Single reducer, subscribe and unsubscribe
    Basics,
    /// Pizza and burger slices combined into one store
    Combined,
    /// Plate counter behind the logging middleware
    Middleware,
    /// Product catalog fetched by a thunk
    Async,
    /// Todo list CRUD
    Todos,
    /// Posts, users, reactions and selectors
    Blog,
}

impl Lesson {
    /// Run the lesson and print its final state
    pub async fn run(self, config: &AppConfig) -> Result<()> {
        log::info!("Running lesson {}", self);
        println!("== {} ==", self);
        match self {
            Lesson::Basics => println!("{:#?}", basics()?),
            Lesson::Combined => println!("{:#?}", combined()?),
            Lesson::Middleware => println!("{:#?}", middleware()?),
            Lesson::Async => println!("{:#?}", async_fetch(config).await?),
            Lesson::Todos => println!("{:#?}", todos()?),
            Lesson::Blog => {
                let state = blog(config).await?;
                let status = selectors::posts_status(&state);
                println!("status: {}", status);
                if let Some(error) = selectors::posts_error(&state) {
                    println!("error: {}", error);
                }
                if status.is_settled() {
                    // Newest first
                    for id in selectors::select_post_ids(&state) {
                        if let Some(post) = selectors::select_post_by_id(&state, id) {
                            println!("{}", describe_post(&state, post));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn describe_post(state: &BlogState, post: &Post) -> String {
    let author = post
        .user_id
        .as_deref()
        .and_then(|id| selectors::select_user_by_id(state, id))
        .map_or("Unknown author", |user| user.name.as_str());
    let reactions: Vec<String> = ReactionKind::iter()
        .map(|kind| format!("{}={}", kind, post.reactions.count(kind)))
        .collect();
    format!(
        "{} by {} ({}) {}",
        post.title,
        author,
        post.date.format("%Y-%m-%d %H:%M"),
        reactions.join(" ")
    )
}

/// Lessons named on the command line, else in the config, else all of them
pub fn select(args: &[String], configured: &[String]) -> Result<Vec<Lesson>> {
    let names = if args.is_empty() { configured } else { args };
    if names.is_empty() {
        return Ok(Lesson::iter().collect());
    }
    names
        .iter()
        .map(|name| {
            Lesson::from_str(name).with_context(|| {
                let known: Vec<String> = Lesson::iter().map(|l| l.to_string()).collect();
                format!("Unknown lesson '{}', expected one of: {}", name, known.join(", "))
            })
        })
        .collect()
}

/// Log every committed state of `store`
fn log_changes<S>(store: &Store<S, Action>, label: &'static str) -> Subscription
where
    S: Clone + Debug + Send + Sync + 'static,
{
    let observer = store.clone();
    store.subscribe(move || log::info!("[{}] {:?}", label, observer.state()))
}

fn basics() -> Result<PizzaState> {
    let store = Store::new(pizza_reducer::reduce);
    let subscription = log_changes(&store, "basics");

    store.dispatch(order_pizza())?;
    subscription.unsubscribe();
    // Not logged any more
    store.dispatch(order_pizza())?;

    Ok((*store.state()).clone())
}

fn combined() -> Result<ShopState> {
    let store = Store::new(shop_reducer());
    let subscription = log_changes(&store, "combined");

    for action in [
        order_pizza(),
        order_pizza(),
        order_pizza(),
        order_burger(),
        add_topping("matata"),
        // Ignored by both slices
        Action::None,
    ] {
        store.dispatch(action)?;
    }

    subscription.unsubscribe();
    Ok((*store.state()).clone())
}

fn middleware() -> Result<PlatesState> {
    let store = Store::builder(fallible(plates_reducer::reduce))
        .with_middleware(LoggingMiddleware::with_level(LESSON_LOG_LEVEL))
        .build();
    let subscription = log_changes(&store, "middleware");

    for _ in 0..3 {
        store.dispatch(PlatesAction::ReducePlates.into())?;
    }

    subscription.unsubscribe();
    Ok((*store.state()).clone())
}

async fn async_fetch(config: &AppConfig) -> Result<ProductsState> {
    let store = Store::builder(products_reducer::reduce)
        .with_middleware(LoggingMiddleware::with_level(LESSON_LOG_LEVEL))
        .with_middleware(ThunkMiddleware)
        .build();
    let subscription = log_changes(&store, "async");

    let source = Arc::new(FixtureCatalog::from_config(&config.catalog));
    store.dispatch_thunk(fetch_products(source))?.await?;

    subscription.unsubscribe();
    Ok((*store.state()).clone())
}

fn todos() -> Result<TodosState> {
    let store = Store::new(todos_reducer::reduce);
    let subscription = log_changes(&store, "todos");

    let added = store.dispatch(add_todo("Learn Rust"))?;
    store.dispatch(update_todo("1", "Hello Rust"))?;
    if let Some(todo) = store.state().find("1") {
        log::debug!("Updated todo {} to '{}'", todo.id, todo.text);
    }
    if let Action::Todos(TodoAction::Add(todo)) = added {
        store.dispatch(update_todo(&todo.id, "Learn Rust ownership"))?;
    }
    store.dispatch(add_todo("Throwaway"))?;
    let throwaway = store
        .state()
        .todos
        .last()
        .map(|todo| todo.id.clone())
        .context("todo list is empty")?;
    store.dispatch(remove_todo(throwaway))?;

    subscription.unsubscribe();
    Ok((*store.state()).clone())
}

async fn blog(config: &AppConfig) -> Result<BlogState> {
    let store = Store::builder(blog_reducer())
        .with_middleware(ThunkMiddleware)
        .build();
    let subscription = log_changes(&store, "blog");

    let source = Arc::new(FixtureBlog::from_config(&config.blog));
    let users = store.dispatch_thunk(fetch_users(source.clone()))?;
    let posts = store.dispatch_thunk(fetch_posts(source))?;
    if selectors::posts_status(&store.state()).is_loading() {
        log::debug!("Posts requested, waiting for the backend");
    }
    tokio::try_join!(users, posts)?;

    let author = selectors::select_all_users(&store.state())
        .first()
        .map(|user| user.id.clone());
    store.dispatch(post_added(
        "Unidirectional data flow",
        "Actions in, state out.",
        author,
    ))?;

    let first = selectors::select_all_posts(&store.state())
        .first()
        .map(|post| post.id.clone());
    if let Some(post_id) = first {
        store.dispatch(reaction_added(&post_id, ReactionKind::Heart))?;
        store.dispatch(reaction_added(&post_id, ReactionKind::ThumbsUp))?;
    }

    subscription.unsubscribe();
    Ok((*store.state()).clone())
}
