//! The game session: command state machine over one world and one player
//!
//! Input goes in as lines or `Command`s, `GameEvent`s come out. Nothing here
//! prints. The only Rust errors are broken internal invariants (a player in a
//! room that does not exist); everything the player can cause is an event.

use crate::combat::{resolve_round, RoundOutcome};
use crate::command::events::{GameEvent, GameState, PlayerView, RoomView};
use crate::command::parser::Command;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::loot::{draw_loot, resolve_equip, EquipDecision, ReplacementOutcome, ReplacementProposal};
use crate::player::Player;
use crate::world::description::WorldDescription;
use crate::world::rooms::Room;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct Session {
    world: WorldDescription,
    player: Player,
    rng: ChaCha8Rng,
    state: GameState,
    /// Set after a chest offers gear for an occupied slot
    pending: Option<ReplacementProposal>,
}

impl Session {
    /// Start playing `world` with the player in its first room
    pub fn new(world: WorldDescription, config: &GameConfig, rng: ChaCha8Rng) -> Self {
        let player = Player::spawn(&world, config);
        tracing::info!(
            room = player.current_room(),
            health = player.health,
            "Session started"
        );
        Self {
            world,
            player,
            rng,
            state: GameState::Playing,
            pending: None,
        }
    }

    /// Like `new`, seeding the loot RNG from the config or from entropy
    pub fn from_config(world: WorldDescription, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(world, config, rng)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &WorldDescription {
        &self.world
    }

    pub fn current_room(&self) -> Result<&Room> {
        self.world.room(self.player.current_room())
    }

    /// The replacement waiting on a Y/N answer, if any
    pub fn pending_replacement(&self) -> Option<&ReplacementProposal> {
        self.pending.as_ref()
    }

    /// Enter `Defeated` if the player is out of health
    ///
    /// Returns the defeat event on the transition only.
    pub fn check_defeat(&mut self) -> Option<GameEvent> {
        if self.state == GameState::Playing && self.player.is_defeated() {
            tracing::info!(health = self.player.health, "Player defeated");
            self.state = GameState::Defeated;
            self.pending = None;
            return Some(GameEvent::PlayerDefeated);
        }
        None
    }

    /// Process one line of input
    ///
    /// While a replacement is pending the line is its answer: `y` accepts,
    /// anything else declines. Terminal sessions ignore input.
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<GameEvent>> {
        if self.state.is_terminal() {
            return Ok(Vec::new());
        }
        if let Some(event) = self.check_defeat() {
            return Ok(vec![event]);
        }

        if self.pending.is_some() {
            let accept = line.trim().eq_ignore_ascii_case("y");
            return Ok(self.answer_replacement(accept));
        }

        match Command::parse(line) {
            Some(command) => self.execute(command),
            None => Ok(Vec::new()),
        }
    }

    /// Run a parsed command
    ///
    /// A replacement still pending is declined first.
    pub fn execute(&mut self, command: Command) -> Result<Vec<GameEvent>> {
        if self.state.is_terminal() {
            return Ok(Vec::new());
        }
        if let Some(event) = self.check_defeat() {
            return Ok(vec![event]);
        }

        tracing::debug!(?command, room = self.player.current_room(), "Executing command");

        let mut events = self.answer_replacement(false);

        match command {
            Command::Stats => events.push(GameEvent::Stats(PlayerView::from(&self.player))),
            Command::Look => events.push(GameEvent::Room(RoomView::from(self.current_room()?))),
            Command::Go(direction) => events.push(self.go(direction)?),
            Command::Open(name) => events.extend(self.open_chest(name)?),
            Command::Fight(name) => events.extend(self.fight(name)?),
            Command::Help => events.push(GameEvent::Help),
            Command::Quit => {
                self.state = GameState::Quit;
                events.push(GameEvent::Farewell);
            }
            Command::Unknown(input) => events.push(GameEvent::UnknownCommand { input }),
        }

        Ok(events)
    }

    /// Settle a pending replacement; no-op when nothing is pending
    pub fn answer_replacement(&mut self, accept: bool) -> Vec<GameEvent> {
        let Some(proposal) = self.pending.take() else {
            return Vec::new();
        };

        let event = match proposal.resolve(&mut self.player, accept) {
            ReplacementOutcome::Replaced { old, new } => {
                tracing::debug!(old = old.name(), new = new.name(), "Gear replaced");
                GameEvent::GearReplaced { old, new }
            }
            ReplacementOutcome::Kept { kept, discarded } => GameEvent::GearKept { kept, discarded },
        };
        vec![event]
    }

    fn go(&mut self, direction: String) -> Result<GameEvent> {
        let destination = self
            .current_room()?
            .exit(&direction)
            .map(str::to_string);

        Ok(match destination {
            Some(destination) => {
                self.player.move_to(destination.clone());
                GameEvent::Moved {
                    direction,
                    destination,
                }
            }
            None => GameEvent::NoExit { direction },
        })
    }

    fn open_chest(&mut self, name: String) -> Result<Vec<GameEvent>> {
        let room = self.world.room_mut(self.player.current_room())?;
        let Some(chest) = room.chest_mut(&name) else {
            return Ok(vec![GameEvent::NoSuchChest { name }]);
        };

        let chest_name = chest.name.clone();
        if !chest.open() {
            return Ok(vec![GameEvent::ChestAlreadyOpened { chest: chest_name }]);
        }

        let mut events = vec![GameEvent::ChestOpened { chest: chest_name }];

        if let Some(item) = draw_loot(self.world.loot_table(), &mut self.rng) {
            events.push(GameEvent::LootFound(item.clone()));
            match resolve_equip(&mut self.player, item) {
                EquipDecision::Equipped(item) => events.push(GameEvent::LootEquipped(item)),
                EquipDecision::Pending(proposal) => {
                    events.push(GameEvent::ReplacementOffered {
                        current: proposal.current().clone(),
                        candidate: proposal.candidate().clone(),
                    });
                    self.pending = Some(proposal);
                }
            }
        }

        Ok(events)
    }

    fn fight(&mut self, name: String) -> Result<Vec<GameEvent>> {
        let room = self.world.room_mut(self.player.current_room())?;
        let Some(monster) = room.monster_mut(&name) else {
            return Ok(vec![GameEvent::NoSuchMonster { name }]);
        };

        let monster_name = monster.name.clone();
        let events = match resolve_round(&mut self.player, monster) {
            RoundOutcome::AlreadyDefeated => vec![GameEvent::MonsterAlreadyDefeated {
                monster: monster_name,
            }],
            RoundOutcome::MonsterDefeated { dealt, gold } => {
                tracing::info!(monster = %monster_name, gold, "Monster defeated");
                vec![
                    GameEvent::Attacked {
                        monster: monster_name.clone(),
                        dealt,
                        remaining: 0,
                    },
                    GameEvent::MonsterDefeated {
                        monster: monster_name,
                        gold,
                    },
                ]
            }
            RoundOutcome::Exchange {
                dealt,
                monster_health,
                raw,
                taken,
            } => vec![
                GameEvent::Attacked {
                    monster: monster_name.clone(),
                    dealt,
                    remaining: monster_health.max(0),
                },
                GameEvent::CounterAttack {
                    monster: monster_name,
                    raw,
                    taken,
                },
            ],
        };

        Ok(events)
    }
}
