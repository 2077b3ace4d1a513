//! Character entity <-> model mapper

use dofus_core::entities::{Breed, Character, Server, Sex, TeamMember, UserProfile};
use dofus_core::value_objects::{BreedId, CharacterId, ServerId, UserId};

use crate::models::{CharacterModel, TeamMemberModel};

/// Convert CharacterModel to Character entity
impl From<CharacterModel> for Character {
    fn from(model: CharacterModel) -> Self {
        Character {
            id: CharacterId::new(model.id),
            name: model.name,
            sex: Sex::from(model.sex.trim()),
            level: model.level,
            alignment: model.alignment,
            stuff: model.stuff,
            default_character: model.default_character,
            user_id: UserId::new(model.user_id),
            server_id: ServerId::new(model.server_id),
            breed_id: BreedId::new(model.breed_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a joined membership row to a TeamMember
impl From<TeamMemberModel> for TeamMember {
    fn from(model: TeamMemberModel) -> Self {
        let server = Server {
            id: ServerId::new(model.character.server_id),
            name: model.server_name,
            mono_account: model.server_mono_account,
        };
        let breed = Breed {
            id: BreedId::new(model.character.breed_id),
            name: model.breed_name,
            description: model.breed_description,
        };
        let owner = UserProfile {
            id: UserId::new(model.character.user_id),
            username: model.owner_username,
            avatar: model.owner_avatar,
        };

        TeamMember {
            character: Character::from(model.character),
            server,
            breed,
            owner,
        }
    }
}
