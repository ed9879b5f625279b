//! Action execution.
//!
//! Every action reads and writes the world and session state handed to it
//! through an [`ActionContext`] and reports what happened to the
//! [`Narrator`]. Player mistakes are narrated, never returned as errors; an
//! `Err` means the world definition itself is broken.

use pixelzork_foundation::{Direction, Result};
use pixelzork_parser::{Command, Heading};
use pixelzork_world::World;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::narration::Narrator;
use crate::rules::RuleBook;
use crate::state::GameState;

/// Narrated when an exit does not exist.
pub const NO_EXIT: &str = "You can't go that way.";
/// Narrated when an exit is locked.
pub const EXIT_LOCKED: &str = "The way is locked.";
/// Narrated when the item to take is not in the room.
pub const NOT_HERE: &str = "You don't see that here.";
/// Narrated when the item to drop is not held.
pub const NOT_HELD: &str = "You don't have that.";
/// Narrated when `use` has no argument.
pub const USE_WHAT: &str = "Use what?";
/// Narrated when the item to use is not held.
pub const NOT_HELD_TO_USE: &str = "You don't have that item.";
/// Narrated when no rule covers a `use`.
pub const NOTHING_HAPPENS: &str = "You try to use it, but nothing special happens.";
/// Narrated for input the parser did not understand.
pub const NOT_UNDERSTOOD: &str =
    "I don't understand that command. Type 'help' for a short list of commands.";
/// Narrated for state-changing commands after the game is won and halted.
pub const GAME_OVER: &str = "The game is over. Type 'restart' to play again.";
/// Narrated by `help`.
pub const HELP: &str = "Commands: go [dir], north/south/east/west/up/down, look, \
                        take <item>, drop <item>, inventory, use <item>, restart";

/// Everything an action may read or change.
pub struct ActionContext<'a> {
    /// World to read and replace.
    pub world: &'a mut World,
    /// Session state to read and update.
    pub state: &'a mut GameState,
    /// Use interactions.
    pub rules: &'a RuleBook,
    /// Session configuration.
    pub config: &'a EngineConfig,
    /// Narration sink.
    pub narrator: &'a mut Narrator,
}

/// Dispatches a parsed command to its action.
///
/// `restart` is not handled here: it replaces the whole session, which is
/// the [`Game`](crate::Game)'s job.
///
/// # Errors
///
/// Returns an error if the world definition is inconsistent.
pub fn perform(ctx: &mut ActionContext, command: &Command) -> Result<()> {
    debug!(%command, room = %ctx.state.current_room(), "performing");
    match command {
        Command::Go(Heading::Known(direction)) => go(ctx, *direction),
        Command::Go(Heading::Unknown(_)) => {
            ctx.narrator.say(NO_EXIT);
            Ok(())
        }
        Command::Look => look(ctx),
        Command::Take(item) => take(ctx, item),
        Command::Drop(item) => drop(ctx, item),
        Command::Inventory => {
            inventory(ctx);
            Ok(())
        }
        Command::Use(item) => use_item(ctx, item),
        Command::Help => {
            help(ctx);
            Ok(())
        }
        Command::Restart => Ok(()),
    }
}

/// Moves through the exit `direction`, then looks.
///
/// # Errors
///
/// Returns an error if the current room or the destination does not exist.
pub fn go(ctx: &mut ActionContext, direction: Direction) -> Result<()> {
    let here = ctx.state.current_room().clone();

    let Some(destination) = ctx.world.exit(&here, direction)?.cloned() else {
        ctx.narrator.say(NO_EXIT);
        return Ok(());
    };

    if ctx.world.is_locked(&here, direction)? {
        ctx.narrator.say(EXIT_LOCKED);
        return Ok(());
    }

    debug!(from = %here, to = %destination, "moving");
    ctx.state.enter(destination);
    ctx.state.count_move();
    look(ctx)
}

/// Describes the current room and anything lying in it.
///
/// # Errors
///
/// Returns an error if the current room does not exist.
pub fn look(ctx: &mut ActionContext) -> Result<()> {
    let room = ctx.world.room(ctx.state.current_room())?;

    ctx.narrator.title(room.name());
    ctx.narrator.say(room.description());

    if !room.is_empty() {
        let items: Vec<&str> = room.items().collect();
        ctx.narrator.system(format!("You see here: {}", items.join(", ")));
    }

    Ok(())
}

/// Moves `item` from the room into the inventory.
///
/// # Errors
///
/// Returns an error if the current room does not exist.
pub fn take(ctx: &mut ActionContext, item: &str) -> Result<()> {
    let here = ctx.state.current_room().clone();

    let Some(world) = ctx.world.remove_item(&here, item)? else {
        ctx.narrator.say(NOT_HERE);
        return Ok(());
    };

    *ctx.world = world;
    ctx.state.pick_up(item);
    ctx.state.count_move();
    ctx.narrator.say(format!("You take the {item}."));

    if ctx.config.is_win_item(item) && !ctx.state.has_won() {
        info!(%item, moves = ctx.state.moves(), "game won");
        ctx.state.mark_won();
        if let Some(win) = &ctx.config.win {
            ctx.narrator.win(win.message.clone());
        }
    }

    Ok(())
}

/// Moves `item` from the inventory into the room.
///
/// # Errors
///
/// Returns an error if the current room does not exist.
pub fn drop(ctx: &mut ActionContext, item: &str) -> Result<()> {
    let here = ctx.state.current_room().clone();

    // Check the room before touching the inventory
    let world = ctx.world.add_item(&here, item)?;

    if !ctx.state.put_down(item) {
        ctx.narrator.say(NOT_HELD);
        return Ok(());
    }

    *ctx.world = world;
    ctx.state.count_move();
    ctx.narrator.say(format!("You drop the {item}."));
    Ok(())
}

/// Lists held items.
pub fn inventory(ctx: &mut ActionContext) {
    let held = ctx.state.inventory();
    let listing = if held.is_empty() {
        "nothing".to_string()
    } else {
        held.join(", ")
    };
    ctx.narrator.system(format!("You are carrying: {listing}"));
}

/// Uses a held item according to the rule book.
///
/// # Errors
///
/// Returns an error if the current room does not exist.
pub fn use_item(ctx: &mut ActionContext, item: &str) -> Result<()> {
    if item.is_empty() {
        ctx.narrator.say(USE_WHAT);
        return Ok(());
    }

    if !ctx.state.holds(item) {
        ctx.narrator.say(NOT_HELD_TO_USE);
        return Ok(());
    }

    let here = ctx.state.current_room().clone();
    let Some(rule) = ctx.rules.find(item, &here) else {
        ctx.narrator.say(NOTHING_HAPPENS);
        return Ok(());
    };

    if !rule.precondition.holds(ctx.world, &here)? {
        ctx.narrator
            .say(rule.otherwise.as_deref().unwrap_or(NOTHING_HAPPENS));
        return Ok(());
    }

    let (world, changed) = rule.effect.apply(ctx.world, &here)?;
    *ctx.world = world;
    if changed {
        debug!(%item, room = %here, effect = ?rule.effect, "rule applied");
        ctx.state.count_move();
    }
    ctx.narrator.say(rule.narration.clone());
    Ok(())
}

/// Lists the supported commands.
pub fn help(ctx: &mut ActionContext) {
    ctx.narrator.system(HELP);
}
