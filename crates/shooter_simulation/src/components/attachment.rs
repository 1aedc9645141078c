//! Attachment: предмет прикреплён к socket'у персонажа

use bevy::prelude::*;

/// Attachment — item висит на socket'е host'а
///
/// Движковый адаптер ставит transform предмета в socket каждый кадр.
/// Снятие компонента = detach с сохранением текущего world transform.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Attachment {
    /// Entity персонажа
    pub host: Entity,

    /// Socket на skeleton host'а (например "RightHandSocket")
    pub socket: String,
}

impl Attachment {
    /// Socket для оружия в правой руке
    pub const RIGHT_HAND_SOCKET: &'static str = "RightHandSocket";

    /// Создать attachment для weapon (правая рука)
    pub fn weapon(host: Entity) -> Self {
        Self {
            host,
            socket: Self::RIGHT_HAND_SOCKET.into(),
        }
    }
}
