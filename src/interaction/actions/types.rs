use bevy::prelude::*;

/// Named game actions. The five control actions start a waiting run; Restart
/// is the external restart command and deliberately does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Forward,
    Backward,
    Leftward,
    Rightward,
    Jump,
    Restart,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Leftward,
        Self::Rightward,
        Self::Jump,
        Self::Restart,
    ];

    /// Actions whose first press starts a run.
    pub const CONTROLS: [PlayerAction; 5] = [
        Self::Forward,
        Self::Backward,
        Self::Leftward,
        Self::Rightward,
        Self::Jump,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Forward" => Some(Self::Forward),
            "Backward" => Some(Self::Backward),
            "Leftward" => Some(Self::Leftward),
            "Rightward" => Some(Self::Rightward),
            "Jump" => Some(Self::Jump),
            "Restart" => Some(Self::Restart),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
            Self::Leftward => 2,
            Self::Rightward => 3,
            Self::Jump => 4,
            Self::Restart => 5,
        }
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct ActionFlags {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Key bindings per action, resolved from the bindings file at startup.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionBindings {
    pub keys: [Vec<KeyCode>; PlayerAction::ALL.len()],
}

impl ActionBindings {
    pub fn keys_for(&self, action: PlayerAction) -> &[KeyCode] {
        &self.keys[action.index()]
    }

    pub fn bind(&mut self, action: PlayerAction, key: KeyCode) {
        self.keys[action.index()].push(key);
    }
}

/// Per-frame boolean state of every action, with press/release edges.
#[derive(Resource, Debug, Default)]
pub struct ActionState {
    flags: [ActionFlags; PlayerAction::ALL.len()],
}

impl ActionState {
    /// Feed this frame's raw held state for one action; edges are derived
    /// from the previous frame's value.
    pub fn apply(&mut self, action: PlayerAction, now_pressed: bool) {
        let f = &mut self.flags[action.index()];
        f.just_pressed = now_pressed && !f.pressed;
        f.just_released = !now_pressed && f.pressed;
        f.pressed = now_pressed;
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        self.flags[action.index()].pressed
    }

    pub fn just_pressed(&self, action: PlayerAction) -> bool {
        self.flags[action.index()].just_pressed
    }

    pub fn just_released(&self, action: PlayerAction) -> bool {
        self.flags[action.index()].just_released
    }

    /// True on the frame any control action (not Restart) is first pressed.
    pub fn any_control_just_pressed(&self) -> bool {
        PlayerAction::CONTROLS
            .iter()
            .any(|&a| self.just_pressed(a))
    }
}
