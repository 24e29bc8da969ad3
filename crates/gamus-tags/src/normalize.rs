use std::num::IntErrorKind;

use gamus_core::{AudioProperties, RawTags, TrackInfo};

use crate::tag_keys::Field;

/// Construye el registro canónico a partir de los tags crudos y las propiedades.
///
/// Nunca falla: la ausencia de datos deja campos vacíos o a cero.
pub fn normalize(raw: &RawTags, props: &AudioProperties) -> TrackInfo {
  TrackInfo {
    title: resolve_text(raw, Field::Title),
    artist: resolve_text(raw, Field::Artist),
    album: resolve_text(raw, Field::Album),
    album_artist: resolve_text(raw, Field::AlbumArtist),
    album_artists: resolve_list(raw, Field::AlbumArtists),
    genre: resolve_text(raw, Field::Genre),
    genres: resolve_list(raw, Field::Genres),
    brainz_id: resolve_text(raw, Field::BrainzId),
    album_brainz_id: resolve_text(raw, Field::AlbumBrainzId),
    track_number: resolve_number(raw, Field::TrackNumber, '/'), // eg. 5/12
    disc_number: resolve_number(raw, Field::DiscNumber, '/'),   // eg. 1/2
    year: resolve_number(raw, Field::Year, '-'),                // eg. 2023-12-01
    length: props.length,
    bitrate: props.bitrate,
  }
}

/// Primer valor no vacío del campo, o `""`.
pub fn resolve_text(raw: &RawTags, field: Field) -> String {
  first(&find(raw, field.keys())).to_string()
}

/// Todos los valores no vacíos de la primera clave candidata que tenga alguno.
pub fn resolve_list(raw: &RawTags, field: Field) -> Vec<String> {
  find(raw, field.keys()).into_iter().map(str::to_string).collect()
}

/// Primer valor no vacío del campo, parseado con [`int_sep`].
pub fn resolve_number(raw: &RawTags, field: Field, sep: char) -> i64 {
  int_sep(sep, first(&find(raw, field.keys())))
}

/// Recorre `keys` en orden y devuelve los valores no vacíos de la primera
/// clave que tenga al menos uno. Las siguientes sólo se prueban si la actual
/// no aporta nada.
pub fn find<'a>(raw: &'a RawTags, keys: &[&str]) -> Vec<&'a str> {
  for (idx, key) in keys.iter().enumerate() {
    let values = non_blank(raw.get(key));
    if !values.is_empty() {
      if idx > 0 {
        tracing::trace!(key = *key, skipped = idx, "tag resolved from fallback key");
      }
      return values;
    }
  }
  Vec::new()
}

/// Primer elemento no vacío, o `""`.
pub fn first<'a>(values: &[&'a str]) -> &'a str {
  values.iter().copied().find(|v| !v.is_empty()).unwrap_or_default()
}

/// Descarta los valores que quedan vacíos tras `trim`, sin alterar el resto.
fn non_blank(values: &[String]) -> Vec<&str> {
  values.iter().map(String::as_str).filter(|v| !v.trim().is_empty()).collect()
}

/// Parsea el prefijo anterior al primer `sep` ("5/12" -> 5, "2023-12-01" -> 2023).
///
/// Sin separador se parsea la cadena entera. Fuera de rango satura a
/// `i64::MAX` / `i64::MIN`; cualquier otro error de parseo da 0.
pub fn int_sep(sep: char, input: &str) -> i64 {
  let head = input.split_once(sep).map_or(input, |(head, _)| head);
  match head.parse::<i64>() {
    Ok(n) => n,
    Err(e) => match e.kind() {
      IntErrorKind::PosOverflow => i64::MAX,
      IntErrorKind::NegOverflow => i64::MIN,
      _ => 0,
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn tags(pairs: &[(&str, &str)]) -> RawTags {
    pairs.iter().copied().collect()
  }

  #[test]
  fn int_sep_without_separator_parses_whole_string() {
    assert_eq!(int_sep('/', "7"), 7);
    assert_eq!(int_sep('-', "2023"), 2023);
  }

  #[test]
  fn int_sep_truncates_at_first_separator() {
    assert_eq!(int_sep('/', "5/12"), 5);
    assert_eq!(int_sep('-', "2023-12-01"), 2023);
    assert_eq!(int_sep('/', "1/2/3"), 1);
  }

  #[test]
  fn int_sep_degrades_to_zero() {
    assert_eq!(int_sep('-', "unknown"), 0);
    assert_eq!(int_sep('/', ""), 0);
    assert_eq!(int_sep('/', "/12"), 0);
    assert_eq!(int_sep('/', "5 /12"), 0);
    assert_eq!(int_sep('/', " 5"), 0);
  }

  #[test]
  fn int_sep_keeps_64_bit_values() {
    assert_eq!(int_sep('-', "3000000000"), 3_000_000_000);
    assert_eq!(int_sep('/', "99999999999/2"), 99_999_999_999);
    assert_eq!(int_sep('/', "-3000000000"), -3_000_000_000);
  }

  #[test]
  fn int_sep_saturates_out_of_range() {
    assert_eq!(int_sep('/', "99999999999999999999"), i64::MAX);
    assert_eq!(int_sep('/', "-99999999999999999999/1"), i64::MIN);
  }

  #[test]
  fn first_non_blank_value_wins() {
    let raw = tags(&[("title", ""), ("title", " "), ("title", "Bohemian Rhapsody"), ("title", "Other")]);
    assert_eq!(resolve_text(&raw, Field::Title), "Bohemian Rhapsody");
  }

  #[test]
  fn blank_first_candidate_falls_back() {
    let raw = tags(&[("albumartist", ""), ("album artist", "Queen")]);
    assert_eq!(resolve_text(&raw, Field::AlbumArtist), "Queen");
  }

  #[test]
  fn earlier_candidate_shadows_later_ones() {
    let raw = tags(&[("date", "1975-10-31"), ("originaldate", "1975"), ("year", "2011")]);
    assert_eq!(resolve_number(&raw, Field::Year, '-'), 1975);

    let raw = tags(&[("date", "2011-09-05"), ("year", "1999")]);
    assert_eq!(resolve_number(&raw, Field::Year, '-'), 2011);
  }

  #[test]
  fn values_keep_surrounding_whitespace() {
    let raw = tags(&[("artist", "  Queen ")]);
    assert_eq!(resolve_text(&raw, Field::Artist), "  Queen ");
  }

  #[test]
  fn multi_value_fields_drop_blanks_and_keep_order() {
    let raw = tags(&[("genres", "Rock"), ("genres", ""), ("genres", "Pop"), ("genres", "Rock")]);
    assert_eq!(resolve_list(&raw, Field::Genres), ["Rock", "Pop", "Rock"]);
  }

  #[test]
  fn multi_value_fallback_uses_whole_sequence_of_one_key() {
    let raw = tags(&[("albumartists", " "), ("album_artists", "Freddie"), ("album_artists", "Brian")]);
    assert_eq!(resolve_list(&raw, Field::AlbumArtists), ["Freddie", "Brian"]);
  }

  #[test]
  fn missing_multi_value_is_empty() {
    assert!(resolve_list(&RawTags::new(), Field::Genres).is_empty());
  }

  #[test]
  fn genre_and_genres_are_independent() {
    let raw = tags(&[("genre", "Rock"), ("genre", "Pop")]);
    assert_eq!(resolve_text(&raw, Field::Genre), "Rock");
    assert!(resolve_list(&raw, Field::Genres).is_empty());
  }

  #[test]
  fn normalize_builds_full_record() {
    let raw = tags(&[
      ("title", "Bohemian Rhapsody"),
      ("artist", "Queen"),
      ("album", "A Night at the Opera"),
      ("albumartist", "Queen"),
      ("albumartists", "Queen"),
      ("genre", "Rock"),
      ("genres", "Rock"),
      ("genres", "Progressive Rock"),
      ("musicbrainz_trackid", "b1a9c0e9-d987-4042-ae91-78d6a3267d69"),
      ("musicbrainz_albumid", "6defd963-fe91-4550-b18e-82c685603c2b"),
      ("tracknumber", "11/12"),
      ("discnumber", "1/1"),
      ("originaldate", "1975-11-21"),
    ]);
    let props = AudioProperties { length: 355, bitrate: 320 };

    let info = normalize(&raw, &props);

    assert_eq!(
      info,
      TrackInfo {
        title: "Bohemian Rhapsody".into(),
        artist: "Queen".into(),
        album: "A Night at the Opera".into(),
        album_artist: "Queen".into(),
        album_artists: vec!["Queen".into()],
        genre: "Rock".into(),
        genres: vec!["Rock".into(), "Progressive Rock".into()],
        brainz_id: "b1a9c0e9-d987-4042-ae91-78d6a3267d69".into(),
        album_brainz_id: "6defd963-fe91-4550-b18e-82c685603c2b".into(),
        track_number: 11,
        disc_number: 1,
        year: 1975,
        length: 355,
        bitrate: 320,
      }
    );
  }

  #[test]
  fn empty_input_gives_empty_record_with_properties() {
    let props = AudioProperties { length: -1, bitrate: 0 };
    let info = normalize(&RawTags::new(), &props);
    assert_eq!(info, TrackInfo { length: -1, ..Default::default() });
  }

  fn candidate_key() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Field::ALL.iter().flat_map(|f| f.keys().iter().copied()).collect::<Vec<_>>())
  }

  proptest! {
    #[test]
    fn blank_only_candidates_resolve_to_empty(
      entries in prop::collection::vec((candidate_key(), "[ \t\r\n]{0,3}"), 0..16),
    ) {
      let raw: RawTags = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
      let info = normalize(&raw, &AudioProperties::default());
      prop_assert_eq!(info, TrackInfo::default());
    }

    #[test]
    fn int_sep_round_trips_integers(n in any::<i64>()) {
      prop_assert_eq!(int_sep('/', &n.to_string()), n);
    }

    #[test]
    fn int_sep_keeps_prefix_before_separator(n in 0..i64::MAX, tail in ".*") {
      prop_assert_eq!(int_sep('/', &format!("{n}/{tail}")), n);
      prop_assert_eq!(int_sep('-', &format!("{n}-{tail}")), n);
    }

    #[test]
    fn list_fields_contain_only_non_blank_values_in_order(
      values in prop::collection::vec("[ a-z]{0,4}", 0..12),
    ) {
      let raw: RawTags = values.iter().map(|v| ("genres", v.as_str())).collect();
      let expected: Vec<String> = values.iter().filter(|v| !v.trim().is_empty()).cloned().collect();
      prop_assert_eq!(resolve_list(&raw, Field::Genres), expected);
    }

    #[test]
    fn normalize_is_deterministic(
      entries in prop::collection::vec((candidate_key(), "[ 0-9a-z/-]{0,8}"), 0..24),
      length in any::<i32>(),
      bitrate in any::<i32>(),
    ) {
      let raw: RawTags = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
      let props = AudioProperties { length, bitrate };
      let once = normalize(&raw, &props);
      prop_assert_eq!(once.length, length);
      prop_assert_eq!(once.bitrate, bitrate);
      prop_assert_eq!(once, normalize(&raw, &props));
    }
  }
}
