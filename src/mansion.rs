//! The fixed mansion map
//!
//! Assembly is a plain sequence of room creations and attachments, kept
//! separate from the navigator so the traversal logic never depends on this
//! particular layout.

use crate::room::Room;
use log::debug;

/// Build the nine-room mansion and return its entrance.
///
/// ```text
/// Entrance
/// ├── left:  Living Room
/// │          ├── left:  Kitchen
/// │          │          └── left: Cellar        (leaf)
/// │          └── right: Garden                  (leaf)
/// └── right: Library
///            ├── left:  Office                  (leaf)
///            └── right: Main Bedroom
///                       └── right: Terrace      (leaf)
/// ```
pub fn build_mansion() -> Result<Room, String> {
    let mut kitchen = Room::new("Kitchen")?;
    kitchen.set_left(Room::new("Cellar")?);

    let mut living_room = Room::new("Living Room")?;
    living_room.set_left(kitchen);
    living_room.set_right(Room::new("Garden")?);

    let mut bedroom = Room::new("Main Bedroom")?;
    bedroom.set_right(Room::new("Terrace")?);

    let mut library = Room::new("Library")?;
    library.set_left(Room::new("Office")?);
    library.set_right(bedroom);

    let mut entrance = Room::new("Entrance")?;
    entrance.set_left(living_room);
    entrance.set_right(library);

    debug!("Mansion map assembled: {} rooms", entrance.room_count());
    Ok(entrance)
}
