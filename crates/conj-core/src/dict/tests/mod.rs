
use crate::dict::VerbDictionary;
use crate::document::{parse_document, Element};
use crate::grammar::Language;

pub(crate) const FRENCH_CONJUGATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE conjugation-fr SYSTEM "conjugation-fr.dtd">
<conjugation-fr>
  <template name="aim:er">
    <infinitive>
      <infinitive-present><p><i>er</i></p></infinitive-present>
    </infinitive>
    <indicative>
      <present>
        <p><i>e</i></p><p><i>es</i></p><p><i>e</i></p>
        <p><i>ons</i></p><p><i>ez</i></p><p><i>ent</i></p>
      </present>
      <imperfect>
        <p><i>ais</i></p><p><i>ais</i></p><p><i>ait</i></p>
        <p><i>ions</i></p><p><i>iez</i></p><p><i>aient</i></p>
      </imperfect>
      <future>
        <p><i>erai</i></p><p><i>eras</i></p><p><i>era</i></p>
        <p><i>erons</i></p><p><i>erez</i></p><p><i>eront</i></p>
      </future>
      <simple-past>
        <p><i>ai</i></p><p><i>as</i></p><p><i>a</i></p>
        <p><i>âmes</i></p><p><i>âtes</i></p><p><i>èrent</i></p>
      </simple-past>
    </indicative>
    <conditional>
      <present>
        <p><i>erais</i></p><p><i>erais</i></p><p><i>erait</i></p>
        <p><i>erions</i></p><p><i>eriez</i></p><p><i>eraient</i></p>
      </present>
    </conditional>
    <subjunctive>
      <present>
        <p><i>e</i></p><p><i>es</i></p><p><i>e</i></p>
        <p><i>ions</i></p><p><i>iez</i></p><p><i>ent</i></p>
      </present>
      <imperfect>
        <p><i>asse</i></p><p><i>asses</i></p><p><i>ât</i></p>
        <p><i>assions</i></p><p><i>assiez</i></p><p><i>assent</i></p>
      </imperfect>
    </subjunctive>
    <imperative>
      <imperative-present>
        <p><i>e</i></p><p><i>ons</i></p><p><i>ez</i></p>
      </imperative-present>
    </imperative>
    <participle>
      <present-participle><p><i>ant</i></p></present-participle>
      <past-participle>
        <p><i>é</i></p><p><i>és</i></p><p><i>ée</i></p><p><i>ées</i></p>
      </past-participle>
    </participle>
  </template>
  <template name="c:éder">
    <infinitive>
      <infinitive-present><p><i>éder</i></p></infinitive-present>
    </infinitive>
    <indicative>
      <present>
        <p><i>ède</i></p><p><i>èdes</i></p><p><i>ède</i></p>
        <p><i>édons</i></p><p><i>édez</i></p><p><i>èdent</i></p>
      </present>
    </indicative>
    <!-- other modes omitted -->
  </template>
</conjugation-fr>
"#;

pub(crate) const FRENCH_VERBS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<verbs-fr>
  <v><i>aimer</i><t>aim:er</t></v>
  <v><i>étaler</i><t>aim:er</t></v>
  <v><i>habiter</i><t>aim:er</t></v>
  <v><i>hacher</i><t>aim:er</t><aspirate-h/></v>
  <v><i>céder</i><t>c:éder</t></v>
</verbs-fr>
"#;

pub(crate) const ITALIAN_CONJUGATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<conjugation-it>
  <template name="am:are">
    <infinitive>
      <infinitive-present><p><i>are</i></p></infinitive-present>
    </infinitive>
    <indicative>
      <present>
        <p><i>o</i></p><p><i>i</i></p><p><i>a</i></p>
        <p><i>iamo</i></p><p><i>ate</i></p><p><i>ano</i></p>
      </present>
      <future>
        <p><i>erò</i></p><p><i>erai</i></p><p><i>erà</i></p>
        <p><i>eremo</i></p><p><i>erete</i></p><p><i>eranno</i></p>
      </future>
    </indicative>
    <subjunctive>
      <present>
        <p><i>i</i></p><p><i>i</i></p><p><i>i</i></p>
        <p><i>iamo</i></p><p><i>iate</i></p><p><i>ino</i></p>
      </present>
    </subjunctive>
    <imperative>
      <imperative-present>
        <p><i>a</i></p><p><i>i</i></p><p><i>iamo</i></p><p><i>ate</i></p><p><i>ino</i></p>
      </imperative-present>
    </imperative>
    <participle>
      <past-participle>
        <p><i>ato</i></p><p><i>ati</i></p><p><i>ata</i></p><p><i>ate</i></p>
      </past-participle>
    </participle>
    <gerund>
      <present-gerund><p><i>ando</i></p></present-gerund>
    </gerund>
  </template>
</conjugation-it>
"#;

pub(crate) const ITALIAN_VERBS: &str = r#"<verbs-it>
  <v><i>amare</i><t>am:are</t></v>
  <v><i>parlare</i><t>am:are</t></v>
</verbs-it>
"#;

pub(crate) fn doc(text: &str) -> Element {
    parse_document(text).unwrap()
}

pub(crate) fn french_dictionary(accent_tolerant: bool) -> VerbDictionary {
    VerbDictionary::from_documents(
        Language::French,
        accent_tolerant,
        &doc(FRENCH_CONJUGATION),
        &doc(FRENCH_VERBS),
        &[],
    )
    .unwrap()
}

pub(crate) fn italian_dictionary(accent_tolerant: bool) -> VerbDictionary {
    VerbDictionary::from_documents(
        Language::Italian,
        accent_tolerant,
        &doc(ITALIAN_CONJUGATION),
        &doc(ITALIAN_VERBS),
        &[],
    )
    .unwrap()
}
