// Polarity lexicon and modifier word lists.
//
// Valences run from -4 (most negative) to +4 (most positive) on the same
// scale as the VADER lexicon. The list is weighted toward the vocabulary
// of nineteenth-century prose (praise, ruin, virtue, decay), since that is
// what the corpus is made of.

/// Word valences. Lookups are lowercase.
pub const VALENCES: &[(&str, f64)] = &[
    // Strong positive
    ("adore", 2.9),
    ("adorable", 2.2),
    ("admirable", 2.6),
    ("admire", 2.1),
    ("admiration", 2.5),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beauty", 2.8),
    ("beloved", 2.3),
    ("best", 3.2),
    ("blessed", 2.9),
    ("blessing", 2.2),
    ("bliss", 2.7),
    ("brilliant", 2.8),
    ("charming", 2.8),
    ("delight", 2.9),
    ("delightful", 2.9),
    ("divine", 2.6),
    ("excellent", 2.7),
    ("exquisite", 2.4),
    ("fantastic", 2.6),
    ("glorious", 2.6),
    ("glory", 2.3),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("heavenly", 2.4),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("magnificent", 2.9),
    ("marvelous", 2.9),
    ("marvellous", 2.9),
    ("masterpiece", 3.1),
    ("perfect", 2.7),
    ("perfection", 2.7),
    ("splendid", 2.8),
    ("sublime", 2.4),
    ("superb", 3.1),
    ("triumph", 2.4),
    ("wonderful", 2.7),
    ("wondrous", 2.4),
    // Moderate positive
    ("accomplish", 1.8),
    ("agreeable", 1.8),
    ("appreciate", 1.7),
    ("approve", 1.8),
    ("attractive", 1.9),
    ("benefit", 1.6),
    ("better", 1.9),
    ("bright", 1.9),
    ("calm", 1.3),
    ("care", 2.2),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("clever", 1.9),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("confident", 2.2),
    ("courage", 2.2),
    ("creative", 1.9),
    ("dignity", 1.7),
    ("eager", 1.5),
    ("easy", 1.9),
    ("elegant", 2.1),
    ("elegance", 2.1),
    ("encourage", 2.3),
    ("enjoy", 2.2),
    ("faith", 1.8),
    ("faithful", 1.9),
    ("fine", 0.8),
    ("free", 2.3),
    ("freedom", 3.2),
    ("fresh", 1.3),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("generous", 2.3),
    ("gentle", 1.9),
    ("gift", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("grace", 1.8),
    ("graceful", 2.0),
    ("grand", 2.0),
    ("grandeur", 2.4),
    ("grateful", 2.0),
    ("harmony", 1.7),
    ("harmonious", 2.0),
    ("healthy", 1.7),
    ("helpful", 1.8),
    ("honest", 2.3),
    ("honesty", 2.2),
    ("honor", 2.2),
    ("honour", 2.2),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("ideal", 2.4),
    ("important", 0.8),
    ("impressive", 2.3),
    ("innocent", 1.4),
    ("inspire", 2.2),
    ("interesting", 1.7),
    ("kind", 2.4),
    ("kindness", 2.6),
    ("like", 1.5),
    ("lively", 1.9),
    ("majestic", 2.7),
    ("merit", 1.6),
    ("nice", 1.8),
    ("noble", 2.0),
    ("nobility", 2.0),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("pleasure", 2.7),
    ("popular", 1.8),
    ("praise", 2.6),
    ("precious", 2.7),
    ("pride", 1.4),
    ("proud", 2.1),
    ("pure", 1.7),
    ("purity", 1.5),
    ("quiet", 0.7),
    ("rich", 2.6),
    ("right", 1.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("serene", 2.0),
    ("simple", 0.3),
    ("skill", 1.4),
    ("skilful", 1.6),
    ("skillful", 1.6),
    ("smile", 1.5),
    ("solid", 0.6),
    ("strength", 2.2),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thoughtful", 1.6),
    ("tranquil", 0.2),
    ("true", 2.0),
    ("trust", 2.3),
    ("truth", 1.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("virtue", 1.9),
    ("virtuous", 2.3),
    ("warm", 0.9),
    ("wealth", 2.2),
    ("welcome", 2.0),
    ("well", 1.1),
    ("win", 2.8),
    ("wisdom", 2.4),
    ("wise", 1.8),
    ("worthy", 1.9),
    ("yes", 1.7),
    // Moderate negative
    ("absurd", -1.3),
    ("afraid", -2.0),
    ("alone", -1.0),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoy", -1.9),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("bad", -2.5),
    ("barren", -1.2),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bleak", -1.7),
    ("blind", -1.4),
    ("bored", -1.1),
    ("broken", -2.1),
    ("burden", -1.9),
    ("careless", -1.5),
    ("clumsy", -1.5),
    ("cold", -0.3),
    ("complain", -1.5),
    ("confused", -1.3),
    ("contempt", -2.1),
    ("crude", -2.0),
    ("cry", -2.1),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dark", -1.4),
    ("decay", -1.7),
    ("deceit", -2.0),
    ("defeat", -2.0),
    ("degrade", -1.9),
    ("dirty", -1.9),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("discontent", -1.8),
    ("dishonest", -2.7),
    ("dull", -1.7),
    ("error", -1.7),
    ("fail", -2.5),
    ("failure", -2.3),
    ("fake", -2.1),
    ("false", -2.2),
    ("falsehood", -2.1),
    ("fault", -1.7),
    ("fear", -2.2),
    ("feeble", -1.2),
    ("foolish", -1.1),
    ("gloomy", -1.6),
    ("grief", -2.2),
    ("guilt", -1.8),
    ("guilty", -1.8),
    ("harm", -2.5),
    ("harsh", -1.9),
    ("hurt", -2.4),
    ("ignorant", -1.1),
    ("ill", -1.8),
    ("imperfect", -1.3),
    ("inferior", -1.7),
    ("lazy", -1.5),
    ("lie", -1.6),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mean", -0.3),
    ("mediocre", -1.0),
    ("mistake", -1.4),
    ("neglect", -2.0),
    ("no", -1.2),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pity", -1.2),
    ("poor", -2.1),
    ("poverty", -2.3),
    ("problem", -1.7),
    ("regret", -1.8),
    ("reject", -1.7),
    ("ruin", -2.8),
    ("ruined", -2.3),
    ("sad", -2.1),
    ("sadness", -1.9),
    ("shame", -2.1),
    ("sick", -2.3),
    ("sorrow", -2.4),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("suffer", -2.5),
    ("suffering", -2.1),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("vain", -1.8),
    ("vanity", -1.6),
    ("waste", -1.8),
    ("weak", -1.9),
    ("weakness", -1.8),
    ("worry", -1.9),
    ("worse", -2.1),
    ("wrong", -2.1),
    // Strong negative
    ("abominable", -3.0),
    ("agony", -3.0),
    ("atrocious", -3.1),
    ("awful", -2.0),
    ("brutal", -3.1),
    ("corrupt", -3.0),
    ("cruel", -2.8),
    ("cruelty", -2.9),
    ("curse", -2.5),
    ("damned", -1.6),
    ("dead", -3.3),
    ("death", -2.9),
    ("despair", -3.0),
    ("destroy", -2.5),
    ("destruction", -2.7),
    ("detestable", -2.9),
    ("disaster", -3.1),
    ("disgrace", -2.2),
    ("disgusting", -2.4),
    ("dreadful", -2.7),
    ("evil", -3.4),
    ("hate", -2.7),
    ("hatred", -3.2),
    ("hideous", -2.7),
    ("horrible", -2.5),
    ("horror", -2.7),
    ("kill", -3.7),
    ("miserable", -2.2),
    ("misery", -2.7),
    ("monstrous", -1.9),
    ("murder", -3.7),
    ("sin", -2.6),
    ("terrible", -2.5),
    ("tragedy", -3.4),
    ("tragic", -3.3),
    ("vile", -3.1),
    ("war", -2.9),
    ("wicked", -2.4),
    ("worst", -3.1),
    ("wretched", -3.0),
];

/// Intensity modifiers: positive scalars amplify, negative ones dampen.
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCREMENT),
    ("amazingly", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("considerably", BOOST_INCREMENT),
    ("decidedly", BOOST_INCREMENT),
    ("deeply", BOOST_INCREMENT),
    ("enormously", BOOST_INCREMENT),
    ("entirely", BOOST_INCREMENT),
    ("especially", BOOST_INCREMENT),
    ("exceedingly", BOOST_INCREMENT),
    ("exceptionally", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("fully", BOOST_INCREMENT),
    ("greatly", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("hugely", BOOST_INCREMENT),
    ("immensely", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("intensely", BOOST_INCREMENT),
    ("most", BOOST_INCREMENT),
    ("particularly", BOOST_INCREMENT),
    ("perfectly", BOOST_INCREMENT),
    ("profoundly", BOOST_INCREMENT),
    ("purely", BOOST_INCREMENT),
    ("quite", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("remarkably", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("supremely", BOOST_INCREMENT),
    ("thoroughly", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("tremendously", BOOST_INCREMENT),
    ("truly", BOOST_INCREMENT),
    ("utterly", BOOST_INCREMENT),
    ("very", BOOST_INCREMENT),
    ("almost", BOOST_DECREMENT),
    ("barely", BOOST_DECREMENT),
    ("hardly", BOOST_DECREMENT),
    ("less", BOOST_DECREMENT),
    ("little", BOOST_DECREMENT),
    ("marginally", BOOST_DECREMENT),
    ("occasionally", BOOST_DECREMENT),
    ("partly", BOOST_DECREMENT),
    ("scarcely", BOOST_DECREMENT),
    ("slightly", BOOST_DECREMENT),
    ("somewhat", BOOST_DECREMENT),
];

/// Words that flip (and dampen) the polarity of what follows.
pub const NEGATIONS: &[&str] = &[
    "not", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "seldom", "rarely", "aint", "dont", "doesnt", "didnt", "isnt", "wasnt",
    "werent", "wont", "wouldnt", "shouldnt", "couldnt", "cant",
];

pub const BOOST_INCREMENT: f64 = 0.293;
pub const BOOST_DECREMENT: f64 = -0.293;
/// Added to the valence of an ALL-CAPS word in a mixed-case sentence.
pub const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
pub const NORMALIZATION_ALPHA: f64 = 15.0;
