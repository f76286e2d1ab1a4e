//! Per-kind execution rules.

use tinyhud_common::{ActionKind, FormId, Hand};
use tinyhud_config::schema::CastingType;
use tinyhud_slots::{Form, SpellClass};
use tracing::{debug, warn};

use super::SlotOutcome;
use crate::host::Host;

pub(super) fn weapon<H: Host>(host: &mut H, id: FormId, hand: Hand) -> SlotOutcome {
    if host.equipped(hand) == Some(id) {
        debug!("{id} already in {hand} hand");
        return SlotOutcome::Unchanged;
    }
    host.equip(id, hand);
    SlotOutcome::Issued
}

pub(super) fn armor<H: Host>(host: &mut H, id: FormId) -> SlotOutcome {
    if host.is_worn(id) {
        debug!("{id} already worn");
        return SlotOutcome::Unchanged;
    }
    host.equip_armor(id);
    SlotOutcome::Issued
}

pub(super) fn spell<H: Host>(
    host: &mut H,
    form: &Form,
    action: ActionKind,
    hand: Hand,
) -> SlotOutcome {
    let Form::Spell {
        id, casting, class, ..
    } = form
    else {
        return SlotOutcome::Skipped;
    };
    let id = *id;

    if *class == SpellClass::Power {
        return power(host, id, action);
    }

    if !host.has_spell(id) {
        warn!("player does not know spell {id}");
        return SlotOutcome::NotPossessed { form: id };
    }

    if action == ActionKind::Instant && *casting != CastingType::Concentration {
        let cost = host.spell_cost(id);
        let magicka = host.magicka();
        if magicka < cost {
            host.flash_magicka_meter();
            warn!("not enough magicka for {id}: have {magicka}, cost {cost}");
            return SlotOutcome::InsufficientMagicka { magicka, cost };
        }
        host.damage_magicka(cost);
        host.cast_instant(id, Some(hand));
        return SlotOutcome::Issued;
    }

    if host.equipped(hand) == Some(id) {
        debug!("spell {id} already in {hand} hand");
        return SlotOutcome::Unchanged;
    }
    host.equip_spell(id, hand);
    SlotOutcome::Issued
}

/// Instant powers are cast without any cooldown check.
fn power<H: Host>(host: &mut H, id: FormId, action: ActionKind) -> SlotOutcome {
    let instant = action == ActionKind::Instant;
    if !instant && host.selected_power() == Some(id) {
        debug!("power {id} already selected");
        return SlotOutcome::Unchanged;
    }
    if !host.has_spell(id) {
        warn!("player does not know power {id}");
        return SlotOutcome::NotPossessed { form: id };
    }
    if instant {
        debug!("casting power {id}, daily cooldown not checked");
        host.cast_instant(id, None);
    } else {
        host.equip_power(id);
    }
    SlotOutcome::Issued
}

pub(super) fn shout<H: Host>(host: &mut H, id: FormId) -> SlotOutcome {
    if host.selected_power() == Some(id) {
        debug!("shout {id} already selected");
        return SlotOutcome::Unchanged;
    }
    host.equip_shout(id);
    SlotOutcome::Issued
}

pub(super) fn scroll<H: Host>(
    host: &mut H,
    id: FormId,
    action: ActionKind,
    hand: Hand,
) -> SlotOutcome {
    if host.item_count(id) <= 0 {
        warn!("scroll {id} not in inventory, maybe all consumed");
        return SlotOutcome::NotPossessed { form: id };
    }
    if action == ActionKind::Instant {
        host.cast_instant(id, None);
        host.remove_item(id, 1);
    } else {
        host.equip(id, hand);
    }
    SlotOutcome::Issued
}

pub(super) fn consumable<H: Host>(host: &mut H, id: FormId) -> SlotOutcome {
    if host.item_count(id) <= 0 {
        warn!("no {id} left to use");
        return SlotOutcome::NotPossessed { form: id };
    }
    host.use_item(id);
    SlotOutcome::Issued
}
